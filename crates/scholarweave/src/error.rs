//! Error types for the ScholarWeave gateway.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

use axum::http::StatusCode;

/// Errors from the upstream HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream call exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Upstream reported the resource does not exist (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Any other non-success status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Upstream URL could not be built
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Classify a reqwest error, folding timeouts into [`ClientError::Timeout`].
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
    }

    /// Returns true if the upstream call timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns true if the failure came from decoding the upstream body.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Errors surfaced by request handling.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// A required request parameter was missing or empty
    #[error("{message}")]
    MissingParameter {
        /// Parameter name
        field: String,
        /// Client-facing message
        message: String,
    },

    /// Upstream call failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] ClientError),

    /// Paper normalization failed
    #[error("Normalization error: {0}")]
    Normalization(String),

    /// Internal fault
    #[error("Internal error: {0}")]
    Internal(String),

    /// No route matched the request
    #[error("Endpoint not found")]
    RouteNotFound {
        /// Requested path
        path: String,
    },
}

impl ApiError {
    /// Create a missing parameter error.
    #[must_use]
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingParameter { field: field.into(), message: message.into() }
    }

    /// Create a normalization error.
    #[must_use]
    pub fn normalization(message: impl Into<String>) -> Self {
        Self::Normalization(message.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream(ClientError::NotFound { .. }) | Self::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Upstream(_) | Self::Normalization(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients.
    ///
    /// Upstream and internal details are replaced by generic text; the full
    /// error is only logged.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingParameter { message, .. } => message.clone(),
            Self::Upstream(ClientError::NotFound { .. }) => "Paper not found".to_string(),
            Self::Upstream(ClientError::Parse(_)) => "Failed to decode response".to_string(),
            Self::Upstream(_) => "Failed to fetch from OpenAlex".to_string(),
            Self::Normalization(_) => "Failed to normalize paper".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::RouteNotFound { .. } => "Endpoint not found".to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for request handling.
pub type ApiResult<T> = Result<T, ApiError>;
