//! Client-side error types
//!
//! `ClientError` is `Clone` on purpose: a single refresh failure settles
//! every request waiting on that cycle, so the same error value fans out to
//! all of them.

use thiserror::Error;

/// Errors produced by the authorized client and the refresh coordinator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The session cannot be recovered; the user must log in again
    #[error("Session expired; re-authentication required")]
    SessionExpired,

    /// The refresh round-trip itself misbehaved
    #[error("Token refresh failed: {message}")]
    Refresh { message: String },

    /// Network-level failure talking to the API
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Transport {
            message: error.to_string(),
        }
    }
}
