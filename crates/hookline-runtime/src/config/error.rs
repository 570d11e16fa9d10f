//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration could not be parsed or extracted.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but is semantically invalid.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
