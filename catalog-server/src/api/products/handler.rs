use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use serde_json::Value;
use shared::{AppError, AppResult, Catalog, ErrorCode, SaveResponse};

use crate::core::ServerState;

/// GET /api/products
pub async fn read(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let document = state.catalog.read().await.map_err(|e| {
        tracing::error!(error = %e, path = %state.catalog.path().display(), "Failed to load catalog");
        AppError::from(e)
    })?;
    Ok(Json(document))
}

/// POST /api/products
///
/// Any JSON value is stored as sent. A body that is not JSON is rejected
/// before the file is touched.
pub async fn replace(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SaveResponse>> {
    let Json(document) = body.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected catalog write");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::new(ErrorCode::PayloadTooLarge)
        } else {
            AppError::invalid_request(rejection.body_text())
        }
    })?;

    if let Err(e) = serde_json::from_value::<Catalog>(document.clone()) {
        tracing::warn!(error = %e, "Storing a document that does not look like a catalog");
    }

    state.catalog.write(&document).await.map_err(|e| {
        tracing::error!(error = %e, path = %state.catalog.path().display(), "Failed to save catalog");
        AppError::from(e)
    })?;

    let products = document
        .get("products")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0);
    tracing::info!(products, "Catalog replaced");

    Ok(Json(SaveResponse::ok()))
}
