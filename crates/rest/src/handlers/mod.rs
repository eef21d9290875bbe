//! HTTP request handlers for blog post interactions.
//!
//! This module contains handlers for all blog post API interactions:
//!
//! - [`list`] - List every post
//! - [`read`] - Read a post by ID
//! - [`create`] - Create a new post
//! - [`update`] - Update an existing post
//! - [`delete`] - Delete a post
//! - [`health`] - Health check endpoint

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
