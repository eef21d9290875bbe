//! List interaction handler.
//!
//! `GET [base]/blog-posts`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_persistence::PostStore;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::CollectionBody;
use crate::state::AppState;

/// Handler for the list interaction.
///
/// Returns every post in the store, wrapped in a `blogPosts` envelope.
///
/// # HTTP Request
///
/// `GET [base]/blog-posts`
///
/// # Response
///
/// - `200 OK` - `{"blogPosts": [...]}`, one element per stored post
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PostStore + Send + Sync,
{
    debug!("Processing list request");

    let posts = state.store().list().await?;

    debug!(count = posts.len(), "Returning blog post collection");

    let body = CollectionBody::from_posts(posts);
    Ok((StatusCode::OK, Json(body)).into_response())
}
