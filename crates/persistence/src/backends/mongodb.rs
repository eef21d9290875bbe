//! MongoDB storage backend.
//!
//! Stores posts as documents in a `blog_posts` collection. Documents keep
//! the same field names as the wire format (`id`, not `_id`), so what the
//! store holds is exactly what [`crate::types::BlogPost`] serializes to.
//!
//! The connection string is supplied externally (for the test suite, the
//! test-database URL); [`MongoBackend::connect`] pings the deployment so an
//! unreachable store fails setup immediately instead of at first use.

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::core::PostStore;
use crate::error::{StorageError, StorageResult};
use crate::types::{BlogPost, NewPost, PostUpdate};

const COLLECTION: &str = "blog_posts";

/// MongoDB-backed [`PostStore`] implementation.
#[derive(Debug, Clone)]
pub struct MongoBackend {
    collection: Collection<BlogPost>,
}

impl MongoBackend {
    /// Connects to the deployment at `uri` and binds the `blog_posts`
    /// collection inside `database`.
    ///
    /// # Errors
    ///
    /// * `StorageError::Connection` - if the URI is invalid or the
    ///   deployment does not answer a ping
    pub async fn connect(uri: &str, database: &str) -> StorageResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(connection_error)?;
        let db = client.database(database);

        // Fail fast: setup failures are fatal to the run, not deferred.
        db.run_command(doc! {"ping": 1})
            .await
            .map_err(connection_error)?;

        info!(database = %database, collection = COLLECTION, "Connected to MongoDB");

        Ok(Self {
            collection: db.collection(COLLECTION),
        })
    }
}

fn connection_error(err: mongodb::error::Error) -> StorageError {
    StorageError::Connection {
        message: err.to_string(),
    }
}

fn backend_error(err: mongodb::error::Error) -> StorageError {
    StorageError::backend("mongodb", err.to_string())
}

fn validate(new: &NewPost) -> StorageResult<()> {
    if new.title.trim().is_empty() {
        return Err(StorageError::invalid("title must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl PostStore for MongoBackend {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn insert(&self, new: NewPost) -> StorageResult<BlogPost> {
        validate(&new)?;
        let post = BlogPost::new(new);
        self.collection
            .insert_one(&post)
            .await
            .map_err(backend_error)?;
        Ok(post)
    }

    async fn insert_many(&self, batch: Vec<NewPost>) -> StorageResult<Vec<BlogPost>> {
        for new in &batch {
            validate(new)?;
        }
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = batch.into_iter().map(BlogPost::new).collect();
        self.collection
            .insert_many(&posts)
            .await
            .map_err(backend_error)?;
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<BlogPost>> {
        self.collection
            .find_one(doc! {"id": id})
            .await
            .map_err(backend_error)
    }

    async fn find_one(&self) -> StorageResult<Option<BlogPost>> {
        self.collection
            .find_one(doc! {})
            .await
            .map_err(backend_error)
    }

    async fn list(&self) -> StorageResult<Vec<BlogPost>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(backend_error)?;

        let mut posts = Vec::new();
        while cursor.advance().await.map_err(backend_error)? {
            posts.push(cursor.deserialize_current().map_err(backend_error)?);
        }
        Ok(posts)
    }

    async fn count(&self) -> StorageResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(backend_error)
    }

    async fn update(&self, id: &str, changes: PostUpdate) -> StorageResult<Option<BlogPost>> {
        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                return Err(StorageError::invalid("title must not be empty"));
            }
        }
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        // Only submitted fields land in $set, so id and created stay put.
        let mut set = Document::new();
        if let Some(title) = &changes.title {
            set.insert("title", title.as_str());
        }
        if let Some(content) = &changes.content {
            set.insert("content", content.as_str());
        }
        if let Some(author) = &changes.author {
            let author = mongodb::bson::to_bson(author).map_err(|e| {
                StorageError::Serialization {
                    message: e.to_string(),
                }
            })?;
            set.insert("author", author);
        }

        let result = self
            .collection
            .update_one(doc! {"id": id}, doc! {"$set": set})
            .await
            .map_err(backend_error)?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> StorageResult<bool> {
        let result = self
            .collection
            .delete_one(doc! {"id": id})
            .await
            .map_err(backend_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn drop_all(&self) -> StorageResult<u64> {
        let dropped = self.count().await?;
        self.collection.drop().await.map_err(backend_error)?;
        debug!(dropped, "Dropped blog post collection");
        Ok(dropped)
    }
}
