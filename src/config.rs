//! Configuration management for the safe-input demo
//!
//! Built-in defaults, overridden by an optional `safe_input.toml` and then by
//! `SAFE_INPUT_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_NAME_BUFFER_SIZE: usize = 50;
const DEFAULT_MAX_ATTEMPTS: usize = 1;
const MAX_NAME_BUFFER_SIZE: usize = 4096;

/// Demo program settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Capacity of the name buffer, terminator slot included
    /// Environment: SAFE_INPUT_NAME_BUFFER_SIZE
    pub name_buffer_size: usize,

    /// How many times a numeric prompt is shown before giving up on
    /// malformed input
    /// Environment: SAFE_INPUT_MAX_ATTEMPTS
    pub max_attempts: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name_buffer_size: DEFAULT_NAME_BUFFER_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl DemoConfig {
    /// Load configuration from ./safe_input.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("safe_input")
    }

    /// Load configuration from the named file (optional) with environment
    /// overrides
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("name_buffer_size", DEFAULT_NAME_BUFFER_SIZE as i64)?
            .set_default("max_attempts", DEFAULT_MAX_ATTEMPTS as i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("SAFE_INPUT").try_parsing(true))
            .build()?;

        let config: DemoConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !(2..=MAX_NAME_BUFFER_SIZE).contains(&self.name_buffer_size) {
            return Err(config::ConfigError::Message(format!(
                "name_buffer_size must be between 2 and {}",
                MAX_NAME_BUFFER_SIZE
            )));
        }

        if self.max_attempts == 0 {
            return Err(config::ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.toml", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = DemoConfig::load_from("definitely_not_here/safe_input").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_config("safe_input_override", "name_buffer_size = 80\nmax_attempts = 3\n");
        let config = DemoConfig::load_from(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.name_buffer_size, 80);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let path = write_config("safe_input_invalid", "name_buffer_size = 1\n");
        let result = DemoConfig::load_from(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());

        let path = write_config("safe_input_zero_attempts", "max_attempts = 0\n");
        let result = DemoConfig::load_from(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
