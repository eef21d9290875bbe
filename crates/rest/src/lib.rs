//! # quill-rest - Blog Post REST API
//!
//! This crate implements the HTTP surface of the Quill blog post service:
//! a small CRUD API over a [`quill_persistence::PostStore`] backend, plus
//! the conformance test suite that exercises it end to end (see `tests/`).
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern | Response |
//! |------------|-------------|-------------|----------|
//! | list | GET | `/blog-posts` | `200` `{"blogPosts": [...]}` |
//! | read | GET | `/blog-posts/{id}` | `200` post, `404` |
//! | create | POST | `/blog-posts` | `201` post + `Location` |
//! | update | PUT | `/blog-posts/{id}` | `204`, no body |
//! | delete | DELETE | `/blog-posts/{id}` | `204`, no body |
//! | health | GET | `/health` | `200` status document |
//!
//! Posts are rendered with the author as a display string
//! (`"{firstName} {lastName}"`); the structured author form exists only in
//! the store.
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON error document with an appropriate status
//! code:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Bad request / invalid payload |
//! | 404 | not-found | Post not found |
//! | 500 | exception | Internal server error |
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUILL_SERVER_PORT` | 8080 | Server port |
//! | `QUILL_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `QUILL_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `QUILL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `QUILL_ENABLE_CORS` | true | Enable CORS |
//! | `QUILL_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `QUILL_STORAGE_BACKEND` | memory | Storage backend (memory, mongodb) |
//! | `QUILL_DATABASE_URL` | - | Store connection string (mongodb) |
//! | `QUILL_DATABASE_NAME` | quill | Database name (mongodb) |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill_rest::{ServerConfig, create_app};
//! use quill_persistence::backends::memory::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(MemoryBackend::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error documents
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`responses`] - API representations of stored posts
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use quill_persistence::PostStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: PostStore + Send + Sync + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the blog post API with all handlers, middleware, and
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// use quill_rest::{ServerConfig, create_app_with_config};
/// use quill_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: PostStore + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(store), config.clone());

    // Build the router with all blog post routes
    let router = routing::post_routes::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quill_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
