//! Catalog Server - persistence and upload API for the safety-equipment site
//!
//! Serves the static site from a document root and exposes:
//!
//! - `GET /api/products` / `POST /api/products` - the catalog document
//! - `POST /api/upload` - product image upload
//! - `GET /health` - health check
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/      # config, state, server, errors
//! ├── store/     # catalog file and upload directory
//! ├── api/       # HTTP handlers
//! ├── routes/    # router and middleware stack
//! └── utils/     # logger
//! ```

pub mod api;
pub mod core;
pub mod routes;
pub mod store;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use routes::build_app;
pub use store::{CatalogStore, ImageStore, StoreError};
pub use utils::{LoggerOptions, init_logger};

/// Load `.env` and install the logger
pub fn setup_environment() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    init_logger(&LoggerOptions::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))?;

    Ok(())
}
