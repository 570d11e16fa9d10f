//! Configuration module for the Hookline runtime.
//!
//! TOML-based configuration loading (with environment overrides) and
//! validation for the pipeline preferences and logging settings.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, load_config, load_config_from_file};
pub use schema::{HooklineConfig, LogFormat, LogLevel, LoggingConfig};
pub use validation::validate_config;
