//! Catalog Client - HTTP client and view controllers for the catalog server
//!
//! Provides network calls to the catalog API plus the page state of the
//! storefront, product detail and admin views.

pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod session;
pub mod views;

#[cfg(test)]
mod mock;

pub use config::ClientConfig;
pub use data::{CatalogSource, Loaded, Origin};
pub use error::{ClientError, ClientResult};
pub use http::{CatalogApi, NetworkHttpClient, UploadFile};
pub use session::{NavigationGuard, SessionState};

// Re-export shared types for convenience
pub use shared::{Catalog, Product, SaveResponse, UploadResponse};
