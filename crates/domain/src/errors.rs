//! Error types used throughout the application

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while fetching activity data from the upstream API.
///
/// Each variant is a distinguishable failure kind so callers can decide
/// between retrying, serving a stale cache entry, or surfacing an error
/// state to the presenter.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// The request was aborted because it did not settle within the
    /// configured deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered HTTP 429.
    #[error("rate limited by upstream (HTTP 429)")]
    RateLimited,

    /// Upstream answered HTTP 403.
    #[error("access forbidden (HTTP 403)")]
    Forbidden,

    /// Upstream answered with a 5xx status.
    #[error("upstream server error (HTTP {0})")]
    ServerError(u16),

    /// Upstream answered with any other non-2xx status.
    #[error("request rejected (HTTP {0})")]
    ClientError(u16),

    /// DNS resolution or connection failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected list of event objects.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Main error type for commitgrid
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum CommitGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for commitgrid operations
pub type Result<T> = std::result::Result<T, CommitGridError>;
