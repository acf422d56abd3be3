//! Error types for the Sparkle resource client

use thiserror::Error;

/// Errors that can occur while fetching a tenant resource
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, DNS, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned a non-success status that has no dedicated variant
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Response body was not JSON or not a JSON object
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Tenant or collection does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server error
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code (5xx)
        status: u16,
        /// Error message
        message: String,
    },
}

/// Result type alias for resource client operations
pub type Result<T> = std::result::Result<T, ApiError>;
