//! HTTP route handlers and the router that wires them.

pub mod receipts;

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the application router.
///
/// | Method | Path                     | Handler                        |
/// |--------|--------------------------|--------------------------------|
/// | POST   | `/receipts/process`      | [`receipts::process_receipt`]  |
/// | GET    | `/receipts/{id}/points`  | [`receipts::get_points`]       |
/// | GET    | `/health`                | liveness probe                 |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(receipts::process_receipt))
        .route("/receipts/{id}/points", get(receipts::get_points))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}
