//! Unified error codes for the catalog service
//!
//! This module defines all error codes used across catalog-server, catalog-client
//! and the browser pages. Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 7xxx: Upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, JavaScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Request body exceeds the configured limit
    PayloadTooLarge = 9,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Backing catalog file is missing or unreadable
    CatalogUnavailable = 6201,
    /// Backing catalog file is not valid JSON
    CatalogCorrupted = 6202,
    /// Backing catalog file could not be written
    CatalogWriteFailed = 6203,

    // ==================== 7xxx: Upload ====================
    /// No file attached to the upload request
    NoFileUploaded = 7001,
    /// File exceeds the client-side size limit
    FileTooLarge = 7002,
    /// File is not an image
    UnsupportedFileFormat = 7003,
    /// Uploaded file could not be stored
    UploadFailed = 7004,

    // ==================== 9xxx: System ====================
    /// Server could not be reached
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::PayloadTooLarge => "Request body too large",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::CatalogUnavailable => "Failed to load products",
            ErrorCode::CatalogCorrupted => "Failed to load products",
            ErrorCode::CatalogWriteFailed => "Failed to save products",

            // Upload
            ErrorCode::NoFileUploaded => "No file uploaded",
            ErrorCode::FileTooLarge => "File is larger than 5MB",
            ErrorCode::UnsupportedFileFormat => "Only image files are accepted",
            ErrorCode::UploadFailed => "Failed to upload file",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::PayloadTooLarge),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6201 => Ok(ErrorCode::CatalogUnavailable),
            6202 => Ok(ErrorCode::CatalogCorrupted),
            6203 => Ok(ErrorCode::CatalogWriteFailed),

            // Upload
            7001 => Ok(ErrorCode::NoFileUploaded),
            7002 => Ok(ErrorCode::FileTooLarge),
            7003 => Ok(ErrorCode::UnsupportedFileFormat),
            7004 => Ok(ErrorCode::UploadFailed),

            // System
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
