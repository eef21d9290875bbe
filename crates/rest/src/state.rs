//! Application state for the blog post REST API.
//!
//! This module defines the shared application state that is available to
//! all request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use quill_persistence::PostStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`PostStore`])
///
/// # Example
///
/// ```rust,ignore
/// use quill_rest::{AppState, ServerConfig};
/// use quill_persistence::backends::memory::MemoryBackend;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryBackend::new());
/// let state = AppState::new(store, ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: PostStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quill_persistence::error::StorageResult;
    use quill_persistence::{BlogPost, NewPost, PostUpdate};

    // Mock store for testing
    struct MockStore;

    #[async_trait]
    impl PostStore for MockStore {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn insert(&self, _new: NewPost) -> StorageResult<BlogPost> {
            unimplemented!()
        }

        async fn insert_many(&self, _batch: Vec<NewPost>) -> StorageResult<Vec<BlogPost>> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: &str) -> StorageResult<Option<BlogPost>> {
            unimplemented!()
        }

        async fn find_one(&self) -> StorageResult<Option<BlogPost>> {
            unimplemented!()
        }

        async fn list(&self) -> StorageResult<Vec<BlogPost>> {
            unimplemented!()
        }

        async fn count(&self) -> StorageResult<u64> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: &str,
            _changes: PostUpdate,
        ) -> StorageResult<Option<BlogPost>> {
            unimplemented!()
        }

        async fn delete(&self, _id: &str) -> StorageResult<bool> {
            unimplemented!()
        }

        async fn drop_all(&self) -> StorageResult<u64> {
            unimplemented!()
        }
    }

    #[test]
    fn test_app_state_creation() {
        let store = Arc::new(MockStore);
        let state = AppState::new(store, ServerConfig::default());

        assert_eq!(state.store().backend_name(), "mock");
        assert_eq!(state.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_app_state_config_access() {
        let store = Arc::new(MockStore);
        let config = ServerConfig {
            base_url: "https://blog.example.com".to_string(),
            ..Default::default()
        };
        let state = AppState::new(store, config);

        assert_eq!(state.base_url(), "https://blog.example.com");
    }

    #[test]
    fn test_app_state_clone() {
        let store = Arc::new(MockStore);
        let state = AppState::new(store, ServerConfig::default());
        let cloned = state.clone();

        assert_eq!(state.base_url(), cloned.base_url());
    }
}
