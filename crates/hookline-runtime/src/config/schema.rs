//! Configuration schema definitions.

use hookline_core::Preferences;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HooklineConfig {
    /// Process-wide logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pipeline preferences (security, exceptions, formatting).
    #[serde(default)]
    pub hooks: Preferences,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level for everything outside the hookline crates
    /// (trace, debug, info, warn, error).
    #[serde(default)]
    pub level: LogLevel,

    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include the target (module path) in log output.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

fn default_with_target() -> bool {
    true
}

/// Base log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, as used in filter directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Converts to a tracing level.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line, abbreviated.
    #[default]
    Compact,
    /// Single-line with full metadata.
    Full,
    /// Multi-line, human-oriented.
    Pretty,
}
