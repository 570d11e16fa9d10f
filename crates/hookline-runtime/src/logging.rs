//! Logging setup on `tracing` / `tracing-subscriber`.
//!
//! The base level comes from [`LoggingConfig::level`]; the hookline crates
//! themselves are filtered separately through the pipeline verbosity
//! preference ([`Verbosity`]), so a quiet process can still surface dropped
//! payloads and a noisy one can trace per-segment narrowing.
//!
//! `RUST_LOG` always wins over configured levels when set.
//!
//! # Example
//!
//! ```rust,ignore
//! use hookline_runtime::config::load_config;
//! use hookline_runtime::logging;
//!
//! let config = load_config()?;
//! logging::init_from_config(&config);
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

use hookline_core::Verbosity;

use crate::config::{HooklineConfig, LogFormat};

/// Initialize logging from configuration.
///
/// Non-panicking: a second initialization (e.g. in tests) is silently
/// ignored.
pub fn init_from_config(config: &HooklineConfig) {
    let _ = LoggingBuilder::from_config(config).try_init();
}

/// A builder for configuring logging.
///
/// # Example
///
/// ```rust,ignore
/// use hookline_runtime::logging::LoggingBuilder;
///
/// LoggingBuilder::new()
///     .base_level("debug")
///     .directive("hookline_framework=trace")
///     .init();
/// ```
#[derive(Default)]
pub struct LoggingBuilder {
    base_level: Option<&'static str>,
    directives: Vec<String>,
    format: LogFormat,
    with_target: bool,
}

impl LoggingBuilder {
    /// Creates a new logging builder.
    pub fn new() -> Self {
        Self {
            base_level: None,
            directives: Vec::new(),
            format: LogFormat::Compact,
            with_target: true,
        }
    }

    /// Creates a builder from configuration.
    pub fn from_config(config: &HooklineConfig) -> Self {
        let mut builder = Self::new();
        builder.base_level = Some(config.logging.level.as_str());
        builder.format = config.logging.format;
        builder.with_target = config.logging.with_target;

        for directive in verbosity_directives(config.hooks.logging) {
            builder.directives.push(directive.to_owned());
        }

        builder
    }

    /// Sets the base level directive (e.g. `"info"`).
    pub fn base_level(mut self, level: &'static str) -> Self {
        self.base_level = Some(level);
        self
    }

    /// Adds a filter directive (e.g. `"hookline_core=trace"`).
    pub fn directive(mut self, directive: &str) -> Self {
        self.directives.push(directive.to_owned());
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Include the target (module path) in log output.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Builds the filter from the base level and directives.
    fn build_filter(&self) -> EnvFilter {
        let base = self.base_level.unwrap_or("info");
        let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base));

        for directive in &self.directives {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }

        filter
    }

    /// Initializes the logging system, ignoring failure.
    pub fn init(self) {
        let _ = self.try_init();
    }

    /// Tries to initialize the logging system.
    pub fn try_init(self) -> Result<(), TryInitError> {
        let filter = self.build_filter();
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(self.with_target))
                .try_init(),
            LogFormat::Full => registry
                .with(fmt::layer().with_target(self.with_target))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_target(self.with_target))
                .try_init(),
        }
    }
}

/// Splits the pipeline verbosity filter into individual directives.
fn verbosity_directives(verbosity: Verbosity) -> impl Iterator<Item = &'static str> {
    verbosity.as_filter().split(',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives_cover_all_crates() {
        let directives: Vec<_> = verbosity_directives(Verbosity::All).collect();
        assert_eq!(directives.len(), 3);
        assert!(directives.iter().all(|d| d.ends_with("=trace")));
    }

    #[test]
    fn test_builder_from_config_picks_up_verbosity() {
        let mut config = HooklineConfig::default();
        config.hooks.logging = Verbosity::Debug;

        let builder = LoggingBuilder::from_config(&config);
        assert!(
            builder
                .directives
                .iter()
                .any(|d| d == "hookline_core=debug")
        );
    }
}
