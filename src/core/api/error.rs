//! Error taxonomy for the Golf Genius API.
//!
//! The first three variants are *raised* conditions: the executor hands them
//! back as `Err` so callers can match on them. The rest are rendered into an
//! `{"error": ...}` body and returned as data.

use serde_json::{Value, json};
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure modes of a Golf Genius API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 429. Carries the `Retry-After` hint in seconds when the API sent one.
    #[error("{}", rate_limited_message(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    /// HTTP 401 or 403.
    #[error("{message}")]
    Authentication { status: u16, message: String },

    /// HTTP 404, parameterized by the requested endpoint.
    #[error("{resource} not found.")]
    NotFound { resource: String },

    /// Any other non-2xx status.
    #[error("API Error {status}: {body}")]
    Http { status: u16, body: String },

    /// Connect or total timeout elapsed.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// The upstream host could not be reached.
    #[error("Unable to connect to Golf Genius API. Check your network connection.")]
    Connection,

    /// Anything else: URL construction, body decoding, client construction.
    #[error("Request failed: {0}")]
    Unexpected(String),
}

fn rate_limited_message(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!("Rate limited. Retry after {secs}s"),
        None => "Rate limited.".to_string(),
    }
}

impl ApiError {
    /// Default message for authentication failures.
    pub const AUTH_MESSAGE: &'static str = "Invalid or expired API key.";

    /// Create an authentication error with the default message.
    pub fn authentication(status: u16) -> Self {
        Self::Authentication {
            status,
            message: Self::AUTH_MESSAGE.to_string(),
        }
    }

    /// Create a "not found" error for the given resource or endpoint.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Authentication { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Timeout | Self::Connection | Self::Unexpected(_) => None,
        }
    }

    /// Whether this condition is propagated as `Err` by the executor.
    pub fn is_raised(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Authentication { .. } | Self::NotFound { .. }
        )
    }

    /// Only rate limiting triggers an automatic retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Render as the `{"error": "..."}` map exposed at the tool boundary.
    pub fn to_error_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection
        } else {
            // GET URLs embed the credential.
            Self::Unexpected(err.without_url().to_string())
        }
    }
}
