// Rust guideline compliant 2026-02-06

//! Error types for the Bugzilla client.

use thiserror::Error;

/// Errors raised while talking to Bugzilla.
#[derive(Debug, Error)]
pub enum BugzillaError {
    /// Transport failure, including timeouts and TLS errors.
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Bugzilla answered with an error payload.
    #[error("Bugzilla error {code}: {message}")]
    Api {
        /// Bugzilla error code.
        code: i64,
        /// Human readable message.
        message: String,
    },

    /// Non-success HTTP status without a recognizable error payload.
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// The response body was not a valid search result.
    #[error("Invalid search response")]
    Decode(#[from] serde_json::Error),
}
