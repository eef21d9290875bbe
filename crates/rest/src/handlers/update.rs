//! Update interaction handler.
//!
//! `PUT [base]/blog-posts/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_persistence::{PostStore, PostUpdate};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Applies a partial update: only submitted fields change, omitted fields
/// retain their prior values, and `id`/`created` can never change.
///
/// # HTTP Request
///
/// `PUT [base]/blog-posts/{id}`
///
/// # Request Body
///
/// Any subset of `{"title", "content", "author"}`.
///
/// # Response
///
/// - `204 No Content` - Post updated, no body
/// - `404 Not Found` - No post has that id
/// - `400 Bad Request` - Empty title or malformed payload
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(changes): Json<PostUpdate>,
) -> RestResult<Response>
where
    S: PostStore + Send + Sync,
{
    debug!(
        id = %id,
        title = changes.title.is_some(),
        content = changes.content.is_some(),
        author = changes.author.is_some(),
        "Processing update request"
    );

    match state.store().update(&id, changes).await? {
        Some(_) => {
            debug!(id = %id, "Blog post updated");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        None => Err(RestError::NotFound { id }),
    }
}
