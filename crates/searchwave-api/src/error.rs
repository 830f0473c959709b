//! Error types for the Searchwave API client.
//!
//! Each variant identifies the step that failed: delivering the request,
//! the backend's HTTP status, decoding the body, or an envelope rejection.

use thiserror::Error;

/// A result type using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the Searchwave API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be delivered (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered outside the 2xx range.
    #[error("remote error: status {status}, body: {body}")]
    Remote {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The response body was not valid JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend processed the request but reported failure in its
    /// confirmation envelope.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Returns true if the backend reported the resource as not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }
}
