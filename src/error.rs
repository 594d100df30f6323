//! Error types for the pressure check skill

use thiserror::Error;

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the speech pipeline
///
/// Failures inside a pressure lookup never surface as `Error` to the voice
/// platform; the orchestrator turns them into a spoken response. These cover
/// startup, upstream clients and application id checks.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Weather conditions lookup error
    #[error("weather error: {0}")]
    Weather(String),

    /// Application id did not match the configured skill
    #[error("application id mismatch: {0}")]
    ApplicationMismatch(String),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
