//! Tagged error taxonomy for API calls.
//!
//! DESIGN
//! ======
//! Callers need to distinguish an expired session from an unreachable server:
//! `Auth` triggers a logout + redirect, everything else surfaces as an inline
//! message or alert in the issuing view. No variant is ever retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure classes for a single REST call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token (HTTP 401).
    #[error("not authorized")]
    Auth,
    /// Any other non-success HTTP status.
    #[error("server responded with status {0}")]
    Server(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the session should be cleared and the user sent to `/login`.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// Classify an HTTP status code. Success statuses return `None`.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Auth),
            other => Some(Self::Server(other)),
        }
    }

    #[cfg(not(feature = "csr"))]
    pub(crate) fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }
}
