//! Conversions from external HTTP failures into domain errors.
//!
//! Classification stays on the infrastructure side so the domain taxonomy
//! never learns about `reqwest`.

use std::time::Duration;

use commitgrid_domain::FetchError;
use reqwest::StatusCode;

/* -------------------------------------------------------------------------- */
/* HTTP status → FetchError */
/* -------------------------------------------------------------------------- */

/// Map a response status to a fetch error, `None` for success statuses.
pub fn classify_status(status: StatusCode) -> Option<FetchError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited,
        StatusCode::FORBIDDEN => FetchError::Forbidden,
        _ if status.is_server_error() => FetchError::ServerError(status.as_u16()),
        _ => FetchError::ClientError(status.as_u16()),
    })
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FetchError */
/* -------------------------------------------------------------------------- */

/// Classify a transport-level failure (no response was produced).
///
/// `timeout` is the deadline the client was configured with, reported back
/// in the `Timeout` variant.
pub fn classify_transport_error(err: &reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else if err.is_connect() {
        FetchError::Network(format!("connection failed: {err}"))
    } else if err.is_decode() {
        FetchError::MalformedResponse(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}
