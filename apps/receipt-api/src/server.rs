//! # Receipt Server
//!
//! Binds the listener and runs the axum router until told to stop.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Server Lifecycle                                 │
//! │                                                                         │
//! │  ReceiptServer::new(config, store)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  start() ── bind fails ──► ServerError::Bind (fatal at startup)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServerHandle ── local_addr() ──► actual port (useful with port 0)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shutdown() ──► graceful drain ──► serve task joined                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use receipt_store::ReceiptStore;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::ServerError;
use crate::routes::router;
use crate::AppState;

/// The HTTP server, not yet listening.
pub struct ReceiptServer {
    config: ApiConfig,
    state: AppState,
}

/// Handle for a running server.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ReceiptServer {
    /// Creates a server around an injected store.
    pub fn new(config: ApiConfig, store: Arc<dyn ReceiptStore>) -> Self {
        let state = AppState::new(store);
        ReceiptServer { config, state }
    }

    /// Binds the listener and starts serving in the background.
    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let app = router(self.state);

        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        info!(addr = %local_addr, "Receipt API listening");

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_rx.recv().await;
                    info!("Receipt API shutting down");
                })
                .await
        });

        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

impl ServerHandle {
    /// Address the server is actually listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections, drains in-flight requests and waits for
    /// the serve task to finish.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        // A closed channel means the serve task already ended.
        let _ = self.shutdown_tx.send(()).await;
        self.task
            .await
            .map_err(|e| ServerError::Serve(std::io::Error::other(e)))??;
        Ok(())
    }
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use receipt_core::{Item, Receipt};
    use receipt_store::{InMemoryReceiptStore, ReceiptId, StoreError, StoreResult};
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use crate::error::STORE_UNAVAILABLE;
    use crate::routes::receipts::{PointsResponse, ProcessResponse};

    /// A store whose backend is always down.
    struct UnavailableStore;

    #[async_trait]
    impl ReceiptStore for UnavailableStore {
        async fn put(&self, _receipt: Receipt) -> StoreResult<ReceiptId> {
            Err(StoreError::Backend("connection refused".to_string()))
        }

        async fn get(&self, _id: &ReceiptId) -> StoreResult<Option<Receipt>> {
            Err(StoreError::Backend("connection refused".to_string()))
        }

        async fn len(&self) -> usize {
            0
        }
    }

    fn test_config(port: u16) -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1".to_string(),
            port,
        }
    }

    async fn start_with(store: Arc<dyn ReceiptStore>) -> (ServerHandle, String) {
        let handle = ReceiptServer::new(test_config(0), store)
            .start()
            .await
            .unwrap();
        let base = format!("http://{}", handle.local_addr());
        (handle, base)
    }

    async fn start() -> (ServerHandle, String) {
        start_with(Arc::new(InMemoryReceiptStore::new())).await
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
                { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
                { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
                { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
            ],
            "total": "35.35"
        })
    }

    async fn submit(client: &reqwest::Client, base: &str, body: &Value) -> reqwest::Response {
        client
            .post(format!("{base}/receipts/process"))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn points(client: &reqwest::Client, base: &str, id: &str) -> reqwest::Response {
        client
            .get(format!("{base}/receipts/{id}/points"))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_submit_then_fetch_points() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let response = submit(&client, &base, &target_receipt()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let ProcessResponse { id } = response.json().await.unwrap();

        let response = points(&client, &base, id.as_str()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: PointsResponse = response.json().await.unwrap();
        assert_eq!(body.points, 28);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_same_payload_twice_gets_two_ids() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let first: ProcessResponse = submit(&client, &base, &target_receipt())
            .await
            .json()
            .await
            .unwrap();
        let second: ProcessResponse = submit(&client, &base, &target_receipt())
            .await
            .json()
            .await
            .unwrap();
        assert_ne!(first.id, second.id);

        for id in [first.id, second.id] {
            let body: PointsResponse = points(&client, &base, id.as_str())
                .await
                .json()
                .await
                .unwrap();
            assert_eq!(body.points, 28);
        }

        handle.shutdown().await.unwrap();
    }

    /// Blank free text is accepted as-is and still scored.
    #[tokio::test]
    async fn test_blank_text_fields_are_accepted() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let body = json!({
            "retailer": "",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "10:00",
            "items": [
                { "shortDescription": "", "price": "5.00" },
                { "shortDescription": "   ", "price": "10.00" }
            ],
            "total": "15.00"
        });
        let response = submit(&client, &base, &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let ProcessResponse { id } = response.json().await.unwrap();

        // round 50 + quarter 25 + one pair 5 + descriptions 1 + 2
        let body: PointsResponse = points(&client, &base, id.as_str())
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(body.points, 83);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (handle, base) = start().await;

        let response = reqwest::get(format!(
            "{base}/receipts/00000000-0000-4000-8000-000000000000/points"
        ))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Receipt not found" }));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{base}/receipts/process"))
            .header("content-type", "application/json")
            .body("{ not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert!(body["message"].is_string());

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let mut body = target_receipt();
        body.as_object_mut().unwrap().remove("items");

        let response = submit(&client, &base, &body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().contains("items"));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_formats_are_bad_request() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let mut body = target_receipt();
        body["purchaseDate"] = json!("2022-02-30");
        let response = submit(&client, &base, &body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message: Value = response.json().await.unwrap();
        assert!(message["message"]
            .as_str()
            .unwrap()
            .starts_with("purchaseDate"));

        let mut body = target_receipt();
        body["items"][2]["price"] = json!("1.2.6");
        let response = submit(&client, &base, &body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message: Value = response.json().await.unwrap();
        assert!(message["message"]
            .as_str()
            .unwrap()
            .starts_with("items[2].price"));

        handle.shutdown().await.unwrap();
    }

    /// A receipt that bypassed submission checks is reported, not scored as 0.
    #[tokio::test]
    async fn test_unscorable_stored_receipt() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let id = store
            .put(Receipt {
                retailer: "Target".to_string(),
                purchase_date: "2022-01-01".to_string(),
                purchase_time: "1:01 PM".to_string(),
                total: "1.25".to_string(),
                items: vec![Item::new("Pepsi - 12-oz", "1.25")],
            })
            .await
            .unwrap();
        let (handle, base) = start_with(store).await;

        let response = points(&reqwest::Client::new(), &base, id.as_str()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["message"],
            "purchaseTime '1:01 PM' is not a valid HH:MM time"
        );

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_points_overflow_is_unprocessable() {
        let (handle, base) = start().await;
        let client = reqwest::Client::new();

        let mut body = target_receipt();
        body["items"] = json!([
            { "shortDescription": "abc", "price": "46116860184273879040" },
            { "shortDescription": "abc", "price": "46116860184273879040" }
        ]);
        let response = submit(&client, &base, &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let ProcessResponse { id } = response.json().await.unwrap();

        let response = points(&client, &base, id.as_str()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().starts_with("points"));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let (handle, base) = start_with(Arc::new(UnavailableStore)).await;
        let client = reqwest::Client::new();

        let response = submit(&client, &base, &target_receipt()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": STORE_UNAVAILABLE }));

        let response = points(&client, &base, "anything").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": STORE_UNAVAILABLE }));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_health() {
        let (handle, base) = start().await;

        let response = reqwest::get(format!("{base}/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "OK");

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure() {
        let (handle, _) = start().await;

        let config = test_config(handle.local_addr().port());
        let result = ReceiptServer::new(config, Arc::new(InMemoryReceiptStore::new()))
            .start()
            .await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));

        handle.shutdown().await.unwrap();
    }
}
