//! Error types for board-client.

use thiserror::Error;

/// Errors that can occur when talking to the board API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A check-in was submitted before every question was answered.
    #[error("Check-in incomplete, unanswered: {}", .missing.join(", "))]
    IncompleteCheckin { missing: Vec<&'static str> },
}

impl ClientError {
    /// True when the API reported that the lead does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
