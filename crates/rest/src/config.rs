//! Server configuration for the blog post REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUILL_SERVER_PORT` | 8080 | Server port |
//! | `QUILL_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `QUILL_LOG_LEVEL` | info | Log level |
//! | `QUILL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `QUILL_ENABLE_CORS` | true | Enable CORS |
//! | `QUILL_CORS_ORIGINS` | * | Allowed origins |
//! | `QUILL_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `QUILL_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `QUILL_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `QUILL_STORAGE_BACKEND` | memory | Storage backend (memory, mongodb) |
//! | `QUILL_DATABASE_URL` | - | Store connection string |
//! | `QUILL_DATABASE_NAME` | quill | Database name |
//!
//! # Example
//!
//! ```rust
//! use quill_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::fmt;

use clap::Parser;

/// Server configuration for the blog post REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "quill")]
#[command(about = "Quill blog post API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "QUILL_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "QUILL_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "QUILL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "QUILL_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "QUILL_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "QUILL_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "QUILL_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "QUILL_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "QUILL_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Storage backend to use (memory, mongodb).
    #[arg(long, env = "QUILL_STORAGE_BACKEND", default_value = "memory")]
    pub storage_backend: String,

    /// Store connection string, supplied externally. Required for the
    /// mongodb backend; the test suite points this at a test database.
    #[arg(long, env = "QUILL_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database name for the mongodb backend.
    #[arg(long, env = "QUILL_DATABASE_NAME", default_value = "quill")]
    pub database_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            database_name: "quill".to_string(),
        }
    }
}

/// Storage backend selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// In-memory backend.
    Memory,
    /// MongoDB backend.
    Mongodb,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::Mongodb => write!(f, "mongodb"),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the configured storage backend name.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        match self.storage_backend.as_str() {
            "memory" => Ok(StorageBackendMode::Memory),
            "mongodb" => Ok(StorageBackendMode::Mongodb),
            other => Err(format!(
                "unknown storage backend '{}' (expected memory or mongodb)",
                other
            )),
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.storage_backend_mode().is_err() {
            errors.push(format!(
                "Unknown storage backend: {}",
                self.storage_backend
            ));
        }

        if self.storage_backend == "mongodb" && self.database_url.is_none() {
            errors.push("QUILL_DATABASE_URL must be set for the mongodb backend".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            database_name: "quill-test".to_string(),
        }
    }
}
