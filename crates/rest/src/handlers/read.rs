//! Read interaction handler.
//!
//! `GET [base]/blog-posts/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_persistence::PostStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::PostBody;
use crate::state::AppState;

/// Handler for the read interaction.
///
/// # HTTP Request
///
/// `GET [base]/blog-posts/{id}`
///
/// # Response
///
/// - `200 OK` - The post, with the author rendered as a display string
/// - `404 Not Found` - No post has that id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: PostStore + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    match state.store().find_by_id(&id).await? {
        Some(post) => Ok((StatusCode::OK, Json(PostBody::from(post))).into_response()),
        None => Err(RestError::NotFound { id }),
    }
}
