/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! Error types for the portal client
//!
//! `AppError` is the single error type surfaced by the library. The two
//! auth-related variants carry the retry contract: `AccessTokenExpired` marks
//! a 401 that is still recoverable by a token refresh, while
//! `SessionInvalidated` means the refresh itself failed and local credentials
//! have been wiped. Callers that receive `SessionInvalidated` should send the
//! user to the login entry point.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The server rejected the request as unauthorized and no further retry is allowed
    Unauthorized,
    /// The access token was rejected on a first attempt; recoverable via refresh
    AccessTokenExpired,
    /// Token refresh failed; the session store has been cleared
    SessionInvalidated,
    /// The server answered with an unexpected, non-auth failure status
    Unexpected(StatusCode),
    /// Transport-level failure from the underlying HTTP client
    Network(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// The caller supplied input the client cannot send
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::AccessTokenExpired => write!(f, "access token expired"),
            AppError::SessionInvalidated => write!(f, "session invalidated"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
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
