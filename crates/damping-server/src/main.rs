//! Backend entry point for the suspension-damping test rig.
//!
//! Wires together configuration, structured logging, the `SQLite` store
//! and the resource API, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Open the store, creating the file and tables if absent
//! 4. Serve the REST API
//! 5. Close the pool on shutdown

mod config;
mod error;

use std::sync::Arc;

use damping_api::AppState;
use damping_db::{SqliteDb, VehicleStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the store cannot be
/// opened, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("damping-server starting");

    run().await.map_err(|e| {
        tracing::error!(error = %e, "damping-server failed");
        e.into()
    })
}

/// Load configuration, open the store and serve.
async fn run() -> Result<(), AppError> {
    // 2. Load configuration.
    let config = AppConfig::from_env()?;
    info!(
        database_url = %config.database.url,
        max_connections = config.database.max_connections,
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // 3. Open the store.
    let db = SqliteDb::connect(&config.database).await?;
    let vehicles = VehicleStore::new(db.pool()).count().await?;
    info!(vehicles, "Store opened");

    // 4. Serve.
    let state = Arc::new(AppState::new(db.clone()));
    damping_api::start_server(&config.server, state).await?;

    // 5. Shut down.
    db.close().await;
    info!("damping-server shutdown complete");
    Ok(())
}
