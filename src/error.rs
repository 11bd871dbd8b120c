/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/

//! Error taxonomy for the trading console.
//!
//! [`AuthError`] covers the startup path only (credential loading and the
//! connectivity verification round trip) and is always fatal. [`AppError`] is
//! everything that can happen once the command loop is running: local
//! validation failures, exchange-side rejections, and transport problems.
//! Mid-loop, every `AppError` is caught at the command boundary, reported
//! once, logged once, and the loop continues.

use reqwest::StatusCode;
use std::fmt;

/// Errors raised while bootstrapping the session. All of them abort the
/// process with a non-zero exit code before the menu is ever shown.
#[derive(Debug)]
pub enum AuthError {
    /// A required credential environment variable is missing or empty
    MissingCredentials(&'static str),
    /// The exchange rejected the API key / signature
    BadCredentials,
    /// The exchange could not be reached at all
    Connectivity(String),
    /// Any other response during verification
    Unexpected(StatusCode),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials(var) => {
                write!(f, "missing credentials: {var} is not set")
            }
            AuthError::BadCredentials => write!(f, "bad credentials"),
            AuthError::Connectivity(msg) => write!(f, "connectivity error: {msg}"),
            AuthError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Main error type for the library.
#[derive(Debug)]
pub enum AppError {
    /// Input rejected locally, before any network call
    InvalidInput(String),
    /// Rejection reported by the exchange, surfaced verbatim
    Exchange {
        /// Exchange error code (e.g. -2011 "Unknown order sent")
        code: i64,
        /// Exchange error message
        message: String,
    },
    /// The exchange rejected the API key or signature
    Unauthorized,
    /// Request-weight or order-count limit exhausted (HTTP 429/418)
    RateLimitExceeded,
    /// Resource not found
    NotFound,
    /// Any other non-success HTTP status
    Unexpected(StatusCode),
    /// Transport-level failure (DNS, TLS, timeout, connection reset)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Filesystem failure (log file handling)
    Io(std::io::Error),
}

impl AppError {
    /// True for errors produced by local validation, i.e. before the request
    /// ever left the process.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Exchange { code, message } => {
                write!(f, "exchange rejected request ({code}): {message}")
            }
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
