//! Error types for the Swaply API client
//!
//! All failures are surfaced to the caller as [`AppError`]. HTTP status codes
//! from the backend are mapped once, in the transport layer, so services never
//! inspect raw responses.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network or protocol level failure from the underlying HTTP client
    Network(reqwest::Error),
    /// The backend rejected the credentials or the bearer token (401)
    Unauthorized,
    /// The authenticated user may not perform this operation (403)
    Forbidden(String),
    /// The requested resource does not exist (404)
    NotFound(String),
    /// The backend rejected the request payload (400)
    InvalidInput(String),
    /// The operation conflicts with the current resource state (409),
    /// e.g. bidding on an ended auction
    Conflict(String),
    /// Any other non-success status
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Forbidden(msg) => write!(f, "forbidden: {msg}"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Conflict(msg) => write!(f, "conflict: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl AppError {
    /// Returns the HTTP status this error was mapped from, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Network(e) => e.status(),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            AppError::InvalidInput(_) => Some(StatusCode::BAD_REQUEST),
            AppError::Conflict(_) => Some(StatusCode::CONFLICT),
            AppError::Unexpected(status) => Some(*status),
        }
    }

    /// True when the failed request was rejected because the HTTP method
    /// itself is not supported (405) or not implemented (501).
    ///
    /// The order update fallback uses this to distinguish "PATCH blocked by
    /// an intermediary" from genuine validation failures.
    #[must_use]
    pub fn is_method_rejected(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::METHOD_NOT_ALLOWED) | Some(StatusCode::NOT_IMPLEMENTED)
        )
    }
}
