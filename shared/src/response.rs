//! API Response types
//!
//! Success bodies of the write and upload endpoints. Failures use
//! [`crate::error::ErrorResponse`]; the read endpoint returns the catalog
//! document itself.

use serde::{Deserialize, Serialize};

/// Message returned after the catalog document has been overwritten
pub const SAVE_SUCCESS_MESSAGE: &str = "Products updated successfully";

/// `POST /api/products` success body
///
/// ```json
/// { "success": true, "message": "Products updated successfully" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

impl SaveResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: SAVE_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// `POST /api/upload` success body
///
/// ```json
/// { "success": true, "path": "assets/images/1718000000000-123456789.jpg" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Path relative to the document root, ready to embed into `images`
    pub path: String,
}

impl UploadResponse {
    pub fn ok(path: impl Into<String>) -> Self {
        Self {
            success: true,
            path: path.into(),
        }
    }
}
