//! Weather client errors

use thiserror::Error;

/// Errors produced while fetching an observation
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout or other transport-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Upstream returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Upstream rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response body could not be decoded into an observation
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether retrying can possibly help
    ///
    /// Transport-level failures are transient; a malformed payload will be
    /// malformed on the next attempt too.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::ServiceUnavailable(_) | Self::RateLimited => true,
            Self::Decode(_) => false,
        }
    }
}
