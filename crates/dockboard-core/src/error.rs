//! Error types for dockboard.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dockboard.
#[derive(Debug, Error)]
pub enum Error {
    /// The container runtime could not be reached.
    #[error("container runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// The runtime returned a record that cannot be displayed.
    #[error("malformed container record: {0}")]
    MalformedRecord(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Page rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
