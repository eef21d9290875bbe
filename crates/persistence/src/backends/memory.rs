//! In-memory storage backend.
//!
//! Keeps posts in an insertion-ordered vector behind a read-write lock.
//! Every instance is a private collection, so a test scenario that owns its
//! backend cannot observe state from any other scenario.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::core::PostStore;
use crate::error::{StorageError, StorageResult};
use crate::types::{BlogPost, NewPost, PostUpdate};

/// In-memory [`PostStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    posts: RwLock<Vec<BlogPost>>,
}

impl MemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate(new: &NewPost) -> StorageResult<()> {
    if new.title.trim().is_empty() {
        return Err(StorageError::invalid("title must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl PostStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, new: NewPost) -> StorageResult<BlogPost> {
        validate(&new)?;
        let post = BlogPost::new(new);
        self.posts.write().push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, batch: Vec<NewPost>) -> StorageResult<Vec<BlogPost>> {
        // Validate the whole batch before writing anything.
        for new in &batch {
            validate(new)?;
        }

        let mut created = Vec::with_capacity(batch.len());
        let mut posts = self.posts.write();
        for new in batch {
            let post = BlogPost::new(new);
            posts.push(post.clone());
            created.push(post);
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<BlogPost>> {
        Ok(self.posts.read().iter().find(|p| p.id() == id).cloned())
    }

    async fn find_one(&self) -> StorageResult<Option<BlogPost>> {
        Ok(self.posts.read().first().cloned())
    }

    async fn list(&self) -> StorageResult<Vec<BlogPost>> {
        Ok(self.posts.read().clone())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.posts.read().len() as u64)
    }

    async fn update(&self, id: &str, changes: PostUpdate) -> StorageResult<Option<BlogPost>> {
        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                return Err(StorageError::invalid("title must not be empty"));
            }
        }

        let mut posts = self.posts.write();
        match posts.iter_mut().find(|p| p.id() == id) {
            Some(post) => {
                post.apply(changes);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut posts = self.posts.write();
        let before = posts.len();
        posts.retain(|p| p.id() != id);
        Ok(posts.len() < before)
    }

    async fn drop_all(&self) -> StorageResult<u64> {
        let mut posts = self.posts.write();
        let dropped = posts.len() as u64;
        posts.clear();
        debug!(dropped, "Dropped blog post collection");
        Ok(dropped)
    }
}
