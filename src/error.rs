use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for releaser operations
#[derive(Error, Debug)]
pub enum ReleaserError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("No recognized tag: {0}")]
    NoRecognizedTag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in releaser
pub type Result<T> = std::result::Result<T, ReleaserError>;

impl ReleaserError {
    /// Create a missing argument error naming the argument
    pub fn missing_argument(name: impl Into<String>) -> Self {
        ReleaserError::MissingArgument(name.into())
    }

    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        ReleaserError::InvalidVersion(msg.into())
    }

    /// Create a tag lookup error with context
    pub fn no_recognized_tag(msg: impl Into<String>) -> Self {
        ReleaserError::NoRecognizedTag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaserError::Config(msg.into())
    }
}
