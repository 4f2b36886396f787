use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Error type covering the failure cases that can occur while amalgamating
/// the header tree.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// Wrapper for IO failures on the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a referenced include target cannot be read.
    #[error("failed to read include '{path}': {source}")]
    Include {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the user provides an include directory that does not exist.
    #[error("include directory not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
