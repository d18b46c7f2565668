//! Domain error types
//!
//! This module defines the error hierarchy for shopsync. All errors are
//! domain-specific and don't expose third-party types, so the rest of the
//! crate never has to name `reqwest` or `csv` error types directly.

use thiserror::Error;

/// Main shopsync error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Shopify API errors
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Pricing errors (arithmetic guards, discount code parsing)
    #[error("Pricing error: {0}")]
    Pricing(String),

    /// Cursor state errors
    #[error("Cursor state error: {0}")]
    State(String),

    /// Output file errors (archive/import CSV writing)
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Shopify-specific errors
///
/// Errors that occur when talking to the Shopify Admin API. These don't
/// expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Failed to reach the Shopify API
    #[error("Failed to connect to Shopify: {0}")]
    ConnectionFailed(String),

    /// Authentication failed (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response body
    #[error("Invalid response from Shopify: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded, retry after: {0}")]
    RateLimitExceeded(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for SyncError {
    fn from(err: csv::Error) -> Self {
        SyncError::Output(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_error_display() {
        let err = SyncError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_shopify_error_conversion() {
        let shopify_err = ShopifyError::ConnectionFailed("Network error".to_string());
        let sync_err: SyncError = shopify_err.into();
        assert!(matches!(sync_err, SyncError::Shopify(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sync_err: SyncError = io_err.into();
        assert!(matches!(sync_err, SyncError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let sync_err: SyncError = json_err.into();
        assert!(matches!(sync_err, SyncError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let sync_err: SyncError = toml_err.into();
        assert!(matches!(sync_err, SyncError::Configuration(_)));
        assert!(sync_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_server_error_display() {
        let err = ShopifyError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 503 - unavailable");
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = SyncError::Pricing("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = ShopifyError::Timeout("30s".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
