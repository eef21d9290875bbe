//! Storage backend implementations.
//!
//! This module contains implementations of [`crate::core::PostStore`] for
//! the supported backends. Each backend is gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | `memory` | Insertion-ordered in-memory store, great for development and tests |
//! | MongoDB | `mongodb` | Document store, configured from a connection string |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "memory")]
//! use quill_persistence::backends::memory::MemoryBackend;
//!
//! # #[cfg(feature = "memory")]
//! let store = MemoryBackend::new();
//! ```

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
