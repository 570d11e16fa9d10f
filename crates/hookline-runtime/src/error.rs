//! Runtime error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while assembling or running the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No payload source was provided to the builder.
    #[error("no payload source configured; call HookRuntimeBuilder::source")]
    MissingSource,
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
