//! Catalog document API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/products | GET | whole catalog document |
//! | /api/products | POST | replace the whole catalog document |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/products", get(handler::read).post(handler::replace))
}
