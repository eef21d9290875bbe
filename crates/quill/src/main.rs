//! Quill blog post server.
//!
//! A small CRUD API over a document store of blog posts.

use clap::Parser;
use quill_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
///
/// A bind failure here is fatal: the process exits instead of limping on
/// without a listening socket.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting Quill server"
    );

    match backend_mode {
        StorageBackendMode::Memory => {
            start_memory(config).await?;
        }
        StorageBackendMode::Mongodb => {
            start_mongodb(config).await?;
        }
    }

    Ok(())
}

/// Starts the server with the in-memory backend.
#[cfg(feature = "memory")]
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    use quill_persistence::backends::memory::MemoryBackend;

    info!("Initializing in-memory backend");
    let backend = MemoryBackend::new();
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the memory feature is not enabled.
#[cfg(not(feature = "memory"))]
async fn start_memory(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The memory backend requires the 'memory' feature. \
         Build with: cargo build -p quill --features memory"
    )
}

/// Starts the server with the MongoDB backend.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use quill_persistence::backends::mongodb::MongoBackend;

    let uri = config.database_url.clone().ok_or_else(|| {
        anyhow::anyhow!("QUILL_DATABASE_URL must be set for the mongodb backend")
    })?;

    info!(database = %config.database_name, "Initializing MongoDB backend");
    let backend = MongoBackend::connect(&uri, &config.database_name).await?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p quill --features mongodb"
    )
}
