//! HTTP layer of the package index
//!
//! # Modules
//!
//! - [`logging`]: Global tracing subscriber setup
//! - [`routes`]: Router, request handlers and error-to-404 mapping
//! - [`state`]: Stores shared by the handlers

pub mod logging;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::IndexConfig;
use crate::server::routes::build_router;
use crate::server::state::IndexState;

/// Serve the index until Ctrl-C is received
pub async fn run_server(config: IndexConfig) -> anyhow::Result<()> {
    let state = IndexState::from_config(&config.storage);
    let listener = TcpListener::bind(&config.server.bind).await?;

    info!(
        "Serving metadata from {:?} and archives from {:?} on http://{}",
        config.storage.metadata_dir,
        config.storage.archive_dir,
        listener.local_addr()?
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
