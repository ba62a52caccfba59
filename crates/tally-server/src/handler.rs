use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use tally_types::{validate, Receipt, ReceiptId};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// `POST /receipts/process`: validate, store, return the assigned id.
///
/// The `Json` rejection is taken as a `Result` so every decode failure —
/// bad syntax and missing fields alike — answers 400, not 422.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(receipt) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    validate(&receipt)?;

    let id = state.store.put(receipt)?;
    tracing::info!(%id, "receipt accepted");
    Ok(Json(SubmitResponse { id }))
}

/// `GET /receipts/{id}/points`: look up the receipt and score it.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = ReceiptId::parse_v4(&id).map_err(|_| ApiError::InvalidId(id))?;

    let receipt = state.store.get(&id)?.ok_or(ApiError::UnknownId)?;
    let points = tally_engine::score(&receipt)?;
    tracing::debug!(%id, points, "points computed");
    Ok(Json(PointsResponse { points }))
}
