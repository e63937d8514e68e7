//! # Receipt API Server Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Create the in-memory receipt store
//! 4. Bind and serve (bind failure exits non-zero)
//! 5. Wait for Ctrl+C / SIGTERM, then drain and exit

use std::sync::Arc;

use anyhow::Context;
use receipt_api::{ApiConfig, ReceiptServer};
use receipt_store::InMemoryReceiptStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Receipt API server...");

    let config = ApiConfig::load().context("Invalid configuration")?;
    info!(addr = %config.bind_address(), "Configuration loaded");

    let store = Arc::new(InMemoryReceiptStore::new());
    let handle = ReceiptServer::new(config, store)
        .start()
        .await
        .context("Could not start Receipt API")?;

    shutdown_signal().await;
    handle.shutdown().await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=receipt_store=trace` - Trace for one crate only
/// - Default: INFO, DEBUG for the receipt crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,receipt_api=debug,receipt_store=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
