//! Shared types for the safety-equipment catalog
//!
//! Data model, error types, response bodies and the catalog rules used by
//! both the server and the client views.

pub mod catalog;
pub mod error;
pub mod models;
pub mod response;
pub mod seed;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use catalog::{CategoryFilter, PageCursor, SpecRow};
pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{Catalog, CategoryMap, Product, Specifications};
pub use response::{SaveResponse, UploadResponse};
