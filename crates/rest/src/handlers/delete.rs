//! Delete interaction handler.
//!
//! `DELETE [base]/blog-posts/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_persistence::PostStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// Deletes a post. Idempotent in effect: deleting an id that is already
/// gone is still `204`, and any later fetch of that id is a miss.
///
/// # HTTP Request
///
/// `DELETE [base]/blog-posts/{id}`
///
/// # Response
///
/// - `204 No Content` - The id no longer names a stored post
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: PostStore + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    let removed = state.store().delete(&id).await?;

    debug!(id = %id, removed, "Delete processed");

    Ok(StatusCode::NO_CONTENT.into_response())
}
