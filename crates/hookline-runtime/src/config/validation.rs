//! Configuration validation utilities.

use super::error::{ConfigError, ConfigResult};
use super::schema::HooklineConfig;

/// Validates the entire configuration.
pub fn validate_config(config: &HooklineConfig) -> ConfigResult<()> {
    validate_hooks_config(config)
}

/// Validates the pipeline preferences.
fn validate_hooks_config(config: &HooklineConfig) -> ConfigResult<()> {
    let hooks = &config.hooks;

    if hooks.use_secure_hooks && hooks.secure_key.is_empty() {
        return Err(ConfigError::validation(
            "secure hooks are enabled but no secure key is configured",
        ));
    }

    // Keys travel as a single payload segment, so a key containing the
    // segment delimiter could never match.
    if hooks.secure_key.contains('/') {
        return Err(ConfigError::validation(
            "secure key cannot contain the '/' segment delimiter",
        ));
    }

    for entry in &hooks.exceptions {
        if entry.is_empty() {
            return Err(ConfigError::validation(
                "exception list entries cannot be empty",
            ));
        }
        if entry.contains('/') {
            return Err(ConfigError::validation(format!(
                "exception entry '{entry}' cannot contain the '/' segment delimiter"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&HooklineConfig::default()).is_ok());
    }

    #[test]
    fn test_secure_mode_requires_key() {
        let mut config = HooklineConfig::default();
        config.hooks.use_secure_hooks = true;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Validation(_))
        ));

        config.hooks.secure_key = "K1".to_owned();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_key_cannot_contain_delimiter() {
        let mut config = HooklineConfig::default();
        config.hooks.secure_key = "bad/key".to_owned();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_exception_entries_must_be_plain_segments() {
        let mut config = HooklineConfig::default();
        config.hooks.exceptions.insert(String::new());
        assert!(validate_config(&config).is_err());

        let mut config = HooklineConfig::default();
        config.hooks.exceptions.insert("a/b".to_owned());
        assert!(validate_config(&config).is_err());
    }
}
