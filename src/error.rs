//! Error types for chart rendering and dashboard state

use thiserror::Error;

/// Result type alias for scopechart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, rendering or persisting state.
///
/// Building a chart from emissions data never fails; these come from the
/// edges (configuration, storage, input parsing).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render content
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// A reporting period label was rejected
    #[error("Invalid reporting period: {0}")]
    InvalidPeriod(String),

    /// Persisted state could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Emissions input could not be parsed
    #[error("Invalid emissions input: {0}")]
    InputError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InputError(err.to_string())
    }
}
