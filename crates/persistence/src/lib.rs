//! Quill Persistence Layer
//!
//! This crate provides the document store behind the Quill blog post API.
//! Blog posts are stored as whole documents through the [`PostStore`] trait,
//! with backends selected via feature flags.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! quill-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! Available backend features:
//! - `memory` (default) - insertion-ordered in-memory store, hermetic and
//!   ideal for development and tests
//! - `mongodb` - MongoDB document storage, configured from an externally
//!   supplied connection string
//!
//! # Architecture
//!
//! The persistence layer is organized into several modules:
//!
//! - [`types`] - the blog post document model
//! - [`error`] - error types for all operations
//! - [`core`] - the [`PostStore`] storage trait
//! - [`backends`] - backend implementations (memory, MongoDB)
//!
//! # Quick Start
//!
//! ```
//! use quill_persistence::{Author, NewPost};
//!
//! let draft = NewPost {
//!     author: Author::new("Ada", "Lovelace"),
//!     title: "Notes on the engine".to_string(),
//!     content: "First entry.".to_string(),
//! };
//!
//! assert_eq!(draft.author.display_name(), "Ada Lovelace");
//! ```
//!
//! # Identity and Timestamps
//!
//! The store assigns `id` (a UUID) and `created` exactly once at insert;
//! neither is ever client-supplied, and updates cannot touch them. A record
//! exists from the moment its insert resolves until a delete resolves or the
//! whole collection is dropped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use core::PostStore;
pub use error::{StorageError, StorageResult};
pub use types::{Author, BlogPost, NewPost, PostUpdate};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
