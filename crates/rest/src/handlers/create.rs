//! Create interaction handler.
//!
//! `POST [base]/blog-posts`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use quill_persistence::{NewPost, PostStore};
use tracing::debug;

use crate::error::RestResult;
use crate::responses::PostBody;
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Creates a new post. The store assigns the post id and creation
/// timestamp; neither may be client-supplied.
///
/// # HTTP Request
///
/// `POST [base]/blog-posts`
///
/// # Request Body
///
/// ```json
/// {"author": {"firstName": "Ada", "lastName": "Lovelace"},
///  "title": "Notes", "content": "First entry."}
/// ```
///
/// # Response
///
/// - `201 Created` - The stored post, author rendered as `"First Last"`,
///   with a `Location` header pointing at the new post
/// - `400 Bad Request` - Empty title or malformed payload
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<NewPost>,
) -> RestResult<Response>
where
    S: PostStore + Send + Sync,
{
    debug!(title = %payload.title, "Processing create request");

    let post = state.store().insert(payload).await?;
    let location = format!("{}/blog-posts/{}", state.base_url(), post.id());

    debug!(id = %post.id(), "Blog post created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PostBody::from(post)),
    )
        .into_response())
}
