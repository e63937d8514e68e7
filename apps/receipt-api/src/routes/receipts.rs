//! # Receipt Routes
//!
//! Submission and points lookup.
//!
//! ## Request Flow
//! ```text
//! POST /receipts/process                 GET /receipts/{id}/points
//!      │                                       │
//!      ▼                                       ▼
//! Json<Receipt> extraction               store.get(id)
//!      │ (rejection → 400)                     │ (None → 404)
//!      ▼                                       ▼
//! validate_receipt                       score_breakdown(receipt)
//!      │ (error → 400)                         │ (ScoreError → 422)
//!      ▼                                       ▼
//! store.put(receipt)                     200 { "points": n }
//!      │
//!      ▼
//! 201 { "id": "..." }
//! ```
//!
//! No scoring happens at submission time.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use receipt_core::{score_breakdown, validate_receipt, Points, Receipt};
use receipt_store::ReceiptId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Response body for a stored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Response body for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProcessResponse>)> {
    let Json(receipt) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected receipt payload");
        ApiError::from(rejection)
    })?;

    validate_receipt(&receipt).map_err(|e| {
        debug!(error = %e, "Receipt failed validation");
        ApiError::from(e)
    })?;

    let item_count = receipt.item_count();
    let id = state.store.put(receipt).await?;

    info!(id = %id, item_count, "Receipt processed");
    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let id = ReceiptId::from(id);

    let Some(receipt) = state.store.get(&id).await? else {
        debug!(id = %id, "Points requested for unknown receipt");
        return Err(ApiError::not_found());
    };

    let points = score_breakdown(&receipt)
        .and_then(|breakdown| {
            debug!(id = %id, ?breakdown, "Receipt scored");
            breakdown.total()
        })
        .map_err(|e| {
            warn!(id = %id, error = %e, "Stored receipt could not be scored");
            ApiError::from(e)
        })?;

    Ok(Json(PointsResponse { points }))
}
