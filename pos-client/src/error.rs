//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request exceeded the configured timeout; the outcome on the
    /// backend is unknown
    #[error("Request timed out")]
    Timeout,

    /// Transport failure other than a timeout
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// HTTP 401; always fatal to the session
    #[error("Authentication required")]
    Unauthorized,

    /// HTTP 403
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// HTTP 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the request (non-2xx other than the above); the
    /// response body is surfaced verbatim
    #[error("Validation error ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Checkout attempted with no line items
    #[error(transparent)]
    EmptyCart(#[from] shared::cart::EmptyCartError),

    /// A sale submission is already outstanding for this cart
    #[error("A sale submission is already in flight")]
    SubmissionInFlight,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
