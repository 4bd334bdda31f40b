//! Error types for GitHub API operations.

use thiserror::Error;

/// Failure of a single GitHub API call.
///
/// Only two kinds exist: a rate limit, which the
/// [`RetryPolicy`](crate::retry::RetryPolicy) waits out, and everything else,
/// which ends the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API error: {0}")]
    Other(String),
}

/// Result type alias using ApiError
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create a fatal error from any message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

/// Returns true when a GitHub error response describes a primary or
/// secondary rate limit.
pub fn is_rate_limit_response(status: u16, message: &str) -> bool {
    if status == 429 {
        return true;
    }

    status == 403 && message.to_lowercase().contains("rate limit")
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ApiError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if is_rate_limit_response(
                    source.status_code.as_u16(),
                    &source.message,
                ) =>
            {
                Self::RateLimited
            }
            _ => Self::Other(err.to_string()),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::Other(format!("URL parse error: {err}"))
    }
}
