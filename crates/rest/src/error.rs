//! Error types for the blog post REST API.
//!
//! This module defines the error type used throughout the HTTP layer, with
//! automatic conversion to a JSON error document.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to appropriate
//! HTTP status codes:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | InvalidPost | 400 | invalid |
//! | Connection | 500 | exception |
//! | Serialization | 500 | exception |
//! | Backend | 500 | exception |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_persistence::StorageError;
use std::fmt;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes.
#[derive(Debug)]
pub enum RestError {
    /// Post not found (HTTP 404).
    NotFound {
        /// The post id.
        id: String,
    },

    /// Bad request - invalid payload (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => {
                write!(f, "Blog post not found: {}", id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            RestError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Blog post {} not found", id),
            ),
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            RestError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "exception",
                message.clone(),
            ),
        };

        let document = create_error_document(code, &details);
        (status, Json(document)).into_response()
    }
}

/// Creates the JSON error document returned for failed requests.
fn create_error_document(code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": details
        }
    })
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidPost { message } => RestError::BadRequest { message },
            StorageError::Connection { message }
            | StorageError::Serialization { message } => RestError::Internal { message },
            StorageError::Backend { message, .. } => RestError::Internal { message },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
