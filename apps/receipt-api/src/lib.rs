//! # Receipt API
//!
//! HTTP server that accepts receipts and reports their loyalty points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐  ┌──────────────────┐  │
//! │  │  POST              │  │  GET               │  │  GET             │  │
//! │  │  /receipts/process │  │  /receipts/{id}/   │  │  /health         │  │
//! │  │                    │  │  points            │  │                  │  │
//! │  │ • validate         │  │ • lookup           │  │ • liveness       │  │
//! │  │ • store            │  │ • score            │  │                  │  │
//! │  └─────────┬──────────┘  └─────────┬──────────┘  └──────────────────┘  │
//! │            │                       │                                    │
//! │  ┌─────────▼───────────────────────▼──────────────────────────────┐    │
//! │  │  AppState                                                       │    │
//! │  │  • store: Arc<dyn ReceiptStore>  (owned by the server)          │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPTS_BIND_ADDR` - Listen address (default: 127.0.0.1)
//! - `RECEIPTS_PORT` - Listen port (default: 8080)
//! - `RUST_LOG` - Log filter (default: `info,receipt_api=debug,receipt_store=debug`)

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::sync::Arc;

use receipt_store::ReceiptStore;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ServerError};
pub use routes::router;
pub use server::{ReceiptServer, ServerHandle};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    /// Creates state around an injected store.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        AppState { store }
    }
}
