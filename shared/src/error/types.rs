//! Error types and the error response body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the catalog service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// The backing catalog file is missing or unreadable
    pub fn catalog_unavailable() -> Self {
        Self::new(ErrorCode::CatalogUnavailable)
    }

    /// The backing catalog file exists but does not parse
    pub fn catalog_corrupted() -> Self {
        Self::new(ErrorCode::CatalogCorrupted)
    }

    /// The backing catalog file could not be written
    pub fn catalog_write_failed() -> Self {
        Self::new(ErrorCode::CatalogWriteFailed)
    }

    /// The upload request carried no `image` file
    pub fn no_file_uploaded() -> Self {
        Self::new(ErrorCode::NoFileUploaded)
    }

    /// The uploaded file could not be stored
    pub fn upload_failed() -> Self {
        Self::new(ErrorCode::UploadFailed)
    }
}

/// Error response body
///
/// ```json
/// {
///   "success": false,
///   "error": "Failed to load products",
///   "code": 6202
/// }
/// ```
///
/// `error` carries the message the original site pages looked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub success: bool,
    /// Human-readable message
    pub error: String,
    /// Numeric error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorResponse {
    /// Create an error response from an AppError
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            error: err.message.clone(),
            code: Some(err.code.code()),
            details: err.details.clone(),
        }
    }

    /// Resolve the code back into an [`ErrorCode`], when it is a known one
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code.and_then(|c| ErrorCode::try_from(c).ok())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            success: false,
            error: err.message,
            code: Some(err.code.code()),
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorResponse::from_error(&self);

        // Log server-side failures
        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "Request failed with server error"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::PayloadTooLarge);
        assert_eq!(err.code, ErrorCode::PayloadTooLarge);
        assert_eq!(err.message, "Request body too large");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::catalog_corrupted()
            .with_detail("line", 3)
            .with_detail("column", 14);

        assert_eq!(err.code, ErrorCode::CatalogCorrupted);
        let details = err.details.unwrap();
        assert_eq!(details.get("line").unwrap(), 3);
        assert_eq!(details.get("column").unwrap(), 14);
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::catalog_corrupted().http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::no_file_uploaded().http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_request("expected value at line 1").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::catalog_write_failed();
        assert_eq!(format!("{}", err), "Failed to save products");
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse::from_error(&AppError::no_file_uploaded());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "No file uploaded");
        assert_eq!(json["code"], 7001);
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_accepts_legacy_body() {
        // Bodies produced by the original node server only carried `error`
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"Failed to load products"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.error, "Failed to load products");
        assert!(body.error_code().is_none());
    }
}
