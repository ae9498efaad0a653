//! Error taxonomy for the remote services and session flows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a remote service call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bad credentials or an invalid/expired token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Input the server rejected (duplicate email, malformed field).
    #[error("invalid input: {0}")]
    Validation(String),

    /// Unreachable service, 5xx, or transport failure.
    #[error("service error: {0}")]
    Service(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    ///
    /// 401/403 map to `Auth`, the 4xx input-rejection statuses to
    /// `Validation`, and everything else (including 5xx) to `Service`.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth(body),
            400 | 409 | 422 => ApiError::Validation(body),
            _ => ApiError::Service(body),
        }
    }
}

/// Failure of a session-mutating operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Another session-mutating operation is still in flight.
    #[error("another session operation is in flight")]
    Busy,

    /// The operation needs an active session and none exists.
    #[error("no active session")]
    NotSignedIn,
}
