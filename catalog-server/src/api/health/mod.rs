//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness plus catalog readability |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "catalog": { "status": "ok", "products": 3 }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::Value;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    catalog: CatalogCheck,
}

/// Catalog file check result
#[derive(Debug, Serialize)]
pub struct CatalogCheck {
    /// ok | error
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CatalogCheck {
    fn ok(products: usize) -> Self {
        Self {
            status: "ok",
            products: Some(products),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            products: None,
            message: Some(message.into()),
        }
    }
}

/// Always 200; a broken catalog only degrades the status
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let catalog = match state.catalog.read().await {
        Ok(document) => CatalogCheck::ok(
            document
                .get("products")
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0),
        ),
        Err(e) => CatalogCheck::error(e.to_string()),
    };

    let status = if catalog.status == "ok" { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        catalog,
    })
}
