use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the environment variables that override the defaults,
/// e.g. `AGRO_CATALOG_MAILBOX_CAPACITY=64`.
pub const ENV_PREFIX: &str = "AGRO_CATALOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Runtime settings for the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Bound of the product actor's mailbox.
    pub mailbox_capacity: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `AGRO_CATALOG_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let capacity = i64::try_from(defaults.mailbox_capacity).unwrap_or(i64::MAX);

        let settings = config::Config::builder()
            .set_default("mailbox_capacity", capacity)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Validation {
                message: "mailbox_capacity must be greater than 0".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
