// Rust guideline compliant 2026-02-06

//! Error types for the triage core library.

use thiserror::Error;

/// Result type alias for triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for triage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid config file")]
    Toml(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// The API credential environment variable is unset or empty.
    #[error("{var} environment variable must be set ({help_url})")]
    MissingCredential {
        /// Name of the environment variable.
        var: String,
        /// Where a key can be obtained.
        help_url: String,
    },

    /// The tracker failed to answer a search.
    #[error("Tracker search failed")]
    Tracker(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps any tracker-side error.
    pub fn tracker<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Tracker(Box::new(err))
    }
}
