//! Upload Routes
//!
//! `POST /api/upload` stores one image and returns its path. Stored files
//! are served by the static fallback like any other site asset.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Multipart field carrying the file
pub const IMAGE_FIELD: &str = "image";

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/upload", post(handler::upload))
}
