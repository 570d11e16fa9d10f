//! Configuration loader using figment.
//!
//! Sources are layered, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. `hookline.toml` from the search paths (or an explicitly set file)
//! 3. Environment variables (`HOOKLINE_*`)
//! 4. Programmatic overrides via [`ConfigLoader::merge`]
//!
//! Environment variables use the `HOOKLINE_` prefix with `__` as the nesting
//! separator: `HOOKLINE_HOOKS__USE_SECURE_HOOKS=true` maps to
//! `hooks.use_secure_hooks = true`.
//!
//! # Example
//!
//! ```rust,ignore
//! use hookline_runtime::config::ConfigLoader;
//!
//! // Search the current directory, then apply env overrides
//! let config = ConfigLoader::new().with_current_dir().load()?;
//!
//! // Load a specific file
//! let config = ConfigLoader::new().file("config/hookline.toml").load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{debug, info, trace};

use super::error::{ConfigError, ConfigResult};
use super::schema::HooklineConfig;

/// Base name of the configuration file.
const CONFIG_FILE_NAME: &str = "hookline.toml";

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader {
    /// User-provided programmatic overrides.
    figment: Figment,
    /// Search paths for configuration files.
    search_paths: Vec<PathBuf>,
    /// Whether to load environment variables.
    load_env: bool,
    /// Specific config file to load (overrides search).
    config_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a new configuration loader with defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            search_paths: Vec::new(),
            load_env: true,
            config_file: None,
        }
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds the current directory to the search paths.
    pub fn with_current_dir(self) -> Self {
        if let Ok(cwd) = std::env::current_dir() {
            self.search_path(cwd)
        } else {
            self
        }
    }

    /// Sets a specific configuration file to load.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: HooklineConfig) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(config));
        self
    }

    /// Loads and returns the configuration.
    pub fn load(self) -> ConfigResult<HooklineConfig> {
        let figment = self.build_figment()?;

        let config: HooklineConfig = figment
            .extract()
            .map_err(|e| ConfigError::parse(format!("failed to extract configuration: {e}")))?;

        debug!(
            logging_level = %config.logging.level,
            secure_hooks = config.hooks.use_secure_hooks,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Builds the figment instance with all sources.
    fn build_figment(mut self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(HooklineConfig::default()));

        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            info!(path = %path.display(), "Loading configuration file");
            figment = figment.merge(Toml::file(path));
        } else {
            for dir in &self.search_paths {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.exists() {
                    info!(path = %candidate.display(), "Loading configuration file");
                    figment = figment.merge(Toml::file(candidate));
                    break;
                }
                trace!(dir = %dir.display(), "No configuration file in search path");
            }
        }

        // Programmatic overrides sit above files, below env.
        let overrides = std::mem::take(&mut self.figment);
        figment = figment.merge(overrides);

        if self.load_env {
            trace!("Loading environment variables with HOOKLINE_ prefix");
            figment = figment.merge(Env::prefixed("HOOKLINE_").split("__"));
        }

        Ok(figment)
    }
}

/// Loads configuration from default locations (current directory + env).
pub fn load_config() -> ConfigResult<HooklineConfig> {
    ConfigLoader::new().with_current_dir().load()
}

/// Loads configuration from a specific file (plus env overrides).
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<HooklineConfig> {
    ConfigLoader::new().file(path).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use std::io::Write;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_no_file_present() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::new()
            .search_path(dir.path())
            .without_env()
            .load()
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.hooks.use_secure_hooks);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
            [logging]
            level = "debug"

            [hooks]
            use_secure_hooks = true
            secure_key = "K1"
            exceptions = ["skip"]
            "#,
        );

        let config = ConfigLoader::new()
            .search_path(dir.path())
            .without_env()
            .load()
            .unwrap();

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.hooks.use_secure_hooks);
        assert_eq!(config.hooks.secure_key, "K1");
        assert!(config.hooks.exceptions.contains("skip"));
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[hooks]\nallow_formatting = false\n");

        let config = ConfigLoader::new().file(&path).without_env().load().unwrap();
        assert!(!config.hooks.allow_formatting);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ConfigLoader::new()
            .file("/nonexistent/hookline.toml")
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_programmatic_merge_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[hooks]\nsecure_key = \"from-file\"\n");

        let mut overrides = HooklineConfig::default();
        overrides.hooks.secure_key = "from-code".to_owned();

        let config = ConfigLoader::new()
            .search_path(dir.path())
            .merge(overrides)
            .without_env()
            .load()
            .unwrap();

        assert_eq!(config.hooks.secure_key, "from-code");
    }
}
