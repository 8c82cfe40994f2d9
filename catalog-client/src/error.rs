//! Client error types

use shared::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Error code reported by the server, or the transport failure kind
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => *code,
            ClientError::Http(e) if e.is_timeout() => Some(ErrorCode::TimeoutError),
            ClientError::Http(_) => Some(ErrorCode::NetworkError),
            _ => None,
        }
    }

    /// The server could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout())
    }

    /// Failure that justifies showing the embedded catalog instead
    ///
    /// Transport failures and error statuses qualify. A success response
    /// whose body does not decode as a catalog does not: the stored document
    /// exists and must not be replaced by the fallback.
    pub fn allows_fallback(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Api { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_code_and_fallback() {
        let err = ClientError::Api {
            status: 500,
            code: Some(ErrorCode::CatalogCorrupted),
            message: "Failed to load products".into(),
        };
        assert_eq!(err.code(), Some(ErrorCode::CatalogCorrupted));
        assert!(err.allows_fallback());
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_undecodable_body_blocks_fallback() {
        let err = ClientError::InvalidResponse("invalid type: floating point `99.5`".into());
        assert_eq!(err.code(), None);
        assert!(!err.allows_fallback());
    }
}
