//! Blog post route configuration.
//!
//! Defines all routes for the blog post REST API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use quill_persistence::PostStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all blog post REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Collection-level
/// - `GET /blog-posts` - List
/// - `POST /blog-posts` - Create
///
/// ## Instance-level
/// - `GET /blog-posts/{id}` - Read
/// - `PUT /blog-posts/{id}` - Update
/// - `DELETE /blog-posts/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PostStore + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // Collection-level routes
        .route("/blog-posts", get(handlers::list_handler::<S>))
        .route("/blog-posts", post(handlers::create_handler::<S>))
        // Instance-level routes
        .route("/blog-posts/{id}", get(handlers::read_handler::<S>))
        .route("/blog-posts/{id}", put(handlers::update_handler::<S>))
        .route("/blog-posts/{id}", delete(handlers::delete_handler::<S>))
        // State
        .with_state(state)
}
