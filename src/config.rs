//! Configuration management
//!
//! Loads settings from an optional config.toml with environment overrides
//! (CREDSTORE_* variables), falling back to built-in defaults.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Credential store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Path of the backing credentials file
    pub credentials_file: String,

    /// Maximum accepted length for any field at sign-up
    pub max_field_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_file: "loginData.txt".to_string(),
            max_field_length: 128,
        }
    }
}

impl AuthConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// The file is optional; defaults apply for anything not set.
    /// Environment: CREDSTORE_CREDENTIALS_FILE, CREDSTORE_MAX_FIELD_LENGTH.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = AuthConfig::default();

        let settings = Config::builder()
            .set_default("credentials_file", defaults.credentials_file)?
            .set_default("max_field_length", defaults.max_field_length as u64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CREDSTORE"))
            .build()?;

        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.credentials_file.is_empty() {
            return Err(config::ConfigError::Message(
                "credentials_file cannot be empty".into(),
            ));
        }

        if self.max_field_length == 0 {
            return Err(config::ConfigError::Message(
                "max_field_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
