//! Core post storage trait.
//!
//! This module defines the [`PostStore`] trait, which provides the CRUD and
//! collection-level operations for blog post documents.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{BlogPost, NewPost, PostUpdate};

/// Storage trait for blog post documents.
///
/// # Identity
///
/// Backends assign `id` and `created` at insert time and never afterwards;
/// [`PostStore::update`] can only touch title, content and author.
///
/// # Absence
///
/// A missing record is part of the normal contract, not a failure:
/// `find_by_id` and `update` resolve to `None`, `delete` resolves to
/// `false`. Errors are reserved for invalid documents and backend faults.
///
/// # Example
///
/// ```ignore
/// use quill_persistence::{NewPost, PostStore, PostUpdate};
///
/// async fn example<S: PostStore>(store: &S) -> StorageResult<()> {
///     let post = store
///         .insert(NewPost {
///             author: Author::new("Ada", "Lovelace"),
///             title: "Notes".to_string(),
///             content: "First entry.".to_string(),
///         })
///         .await?;
///
///     // Read it back
///     let read = store.find_by_id(post.id()).await?;
///     assert!(read.is_some());
///
///     // Update only the title
///     store
///         .update(post.id(), PostUpdate {
///             title: Some("Revised".to_string()),
///             ..Default::default()
///         })
///         .await?;
///
///     // Delete it
///     assert!(store.delete(post.id()).await?);
///
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Inserts a single post, assigning its `id` and `created`.
    ///
    /// # Errors
    ///
    /// * `StorageError::InvalidPost` - if the title is empty
    /// * `StorageError::Backend` - if the backend fails
    async fn insert(&self, new: NewPost) -> StorageResult<BlogPost>;

    /// Inserts a batch of posts in one operation.
    ///
    /// Used to seed fixture data before a test scenario. The whole batch is
    /// validated before anything is written.
    ///
    /// # Returns
    ///
    /// The stored documents, in input order, with assigned ids and
    /// timestamps.
    async fn insert_many(&self, batch: Vec<NewPost>) -> StorageResult<Vec<BlogPost>>;

    /// Reads a post by id.
    ///
    /// # Returns
    ///
    /// The document if present, or `None`.
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<BlogPost>>;

    /// Returns any single post, or `None` when the collection is empty.
    ///
    /// The memory backend yields the oldest record; other backends may pick
    /// any document.
    async fn find_one(&self) -> StorageResult<Option<BlogPost>>;

    /// Returns every post in the collection.
    async fn list(&self) -> StorageResult<Vec<BlogPost>>;

    /// Counts the posts in the collection.
    async fn count(&self) -> StorageResult<u64>;

    /// Applies a partial update to the post with the given id.
    ///
    /// Only submitted fields change; `id` and `created` are immutable.
    ///
    /// # Returns
    ///
    /// The updated document, or `None` when no post has that id.
    async fn update(&self, id: &str, changes: PostUpdate) -> StorageResult<Option<BlogPost>>;

    /// Deletes the post with the given id.
    ///
    /// # Returns
    ///
    /// `true` when a document was removed, `false` when the id was already
    /// absent. Deleting twice is therefore not an error.
    async fn delete(&self, id: &str) -> StorageResult<bool>;

    /// Drops every post in the collection.
    ///
    /// This is the teardown primitive: it runs after every test scenario so
    /// no scenario observes leftover state from a previous run.
    ///
    /// # Returns
    ///
    /// The number of documents removed.
    async fn drop_all(&self) -> StorageResult<u64>;

    /// Checks if a post with the given id exists.
    ///
    /// This is more convenient than `find_by_id` when you only need the
    /// answer, not the document.
    async fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
