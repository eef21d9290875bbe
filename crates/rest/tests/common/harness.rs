//! Blog post API test harness.
//!
//! Runs the fixture lifecycle around every scenario: build a private server
//! and store, seed synthetic posts, run one HTTP assertion scenario, then
//! drop the collection. Each scenario owns its store, so no scenario can
//! observe leftover state from another run regardless of test ordering.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use quill_persistence::backends::memory::MemoryBackend;
use quill_persistence::{BlogPost, PostStore};
use serde_json::Value;

use quill_rest::{AppState, ServerConfig, routing};

use super::fixtures::{FixtureSource, SequentialFixtures};

/// Test harness for blog post API scenarios.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_list() {
///     let harness = TestHarness::new();
///     harness.seed_posts(11).await;
///
///     let response = harness.get("/blog-posts").await;
///     assert_eq!(response.status_code().as_u16(), 200);
///
///     harness.teardown().await;
/// }
/// ```
pub struct TestHarness {
    /// The in-process test server.
    pub server: TestServer,

    /// The store behind the server, for persisted-state checks.
    pub store: Arc<MemoryBackend>,

    /// Server configuration the app was built with.
    pub config: ServerConfig,

    /// Fixture data source for seeding.
    fixtures: Box<dyn FixtureSource>,
}

impl TestHarness {
    /// Scenario setup with the default deterministic fixture source.
    ///
    /// Panics when the server cannot be constructed, aborting the scenario
    /// before any assertion runs.
    pub fn new() -> Self {
        Self::with_fixtures(Box::new(SequentialFixtures))
    }

    /// Scenario setup with a custom fixture source.
    pub fn with_fixtures(fixtures: Box<dyn FixtureSource>) -> Self {
        let config = ServerConfig::for_testing();
        let store = Arc::new(MemoryBackend::new());

        let state = AppState::new(Arc::clone(&store), config.clone());
        let app = routing::create_routes(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            store,
            config,
            fixtures,
        }
    }

    /// Seeds `count` synthetic posts through the store's bulk insert and
    /// returns them with their assigned ids.
    pub async fn seed_posts(&self, count: usize) -> Vec<BlogPost> {
        let batch = self.fixtures.batch(count);
        self.store
            .insert_many(batch)
            .await
            .expect("Failed to seed blog posts")
    }

    /// Returns one seeded post, for scenarios that target an existing id.
    pub async fn any_post(&self) -> BlogPost {
        self.store
            .find_one()
            .await
            .expect("Store read failed")
            .expect("Store is empty; seed before calling any_post")
    }

    /// Fetches a post by id straight from the store, bypassing HTTP.
    ///
    /// Mutating scenarios use this to confirm persisted state matches the
    /// request they issued.
    pub async fn stored_post(&self, id: &str) -> Option<BlogPost> {
        self.store.find_by_id(id).await.expect("Store read failed")
    }

    /// Returns the number of posts currently in the store.
    pub async fn stored_count(&self) -> u64 {
        self.store.count().await.expect("Store count failed")
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }

    /// Scenario teardown: unconditionally drops every record so the next
    /// scenario starts from a clean collection, then verifies the drop.
    pub async fn teardown(&self) {
        self.store
            .drop_all()
            .await
            .expect("Failed to drop blog post collection");

        assert_eq!(
            self.stored_count().await,
            0,
            "teardown left records behind"
        );
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
