//! Data models
//!
//! Shared between catalog-server, catalog-client and the browser pages (via API).

pub mod catalog;
pub mod product;

// Re-exports
pub use catalog::*;
pub use product::*;
