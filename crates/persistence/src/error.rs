//! Error types for the persistence layer.
//!
//! A missing record is not an error: `find_by_id` and `update` return
//! `Option`, and `delete` reports whether anything was removed. The variants
//! here cover the failures that remain — invalid documents, unreachable
//! stores, and backend faults.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The document violates a data-model invariant.
    #[error("invalid post: {message}")]
    InvalidPost { message: String },

    /// The store could not be reached or refused the connection.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// A document could not be converted to or from its stored form.
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// The backend reported an operational failure.
    #[error("backend error ({backend_name}): {message}")]
    Backend {
        backend_name: &'static str,
        message: String,
    },
}

impl StorageError {
    /// Creates an `InvalidPost` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        StorageError::InvalidPost {
            message: message.into(),
        }
    }

    /// Creates a `Backend` error for the named backend.
    pub fn backend(backend_name: &'static str, message: impl Into<String>) -> Self {
        StorageError::Backend {
            backend_name,
            message: message.into(),
        }
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
