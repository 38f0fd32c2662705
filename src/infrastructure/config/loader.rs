use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Directory holding project configuration, relative to the working directory.
pub const PROJECT_CONFIG_DIR: &str = ".docstore";

/// Prefix for environment overrides, nested keys split on `__`.
pub const ENV_PREFIX: &str = "DOCSTORE_";

/// Upper bound for the cache window (one year).
pub const MAX_EXPIRATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Storage collection cannot be empty")]
    EmptyCollection,

    #[error("Invalid storage collection: {0}. Must be a single directory name")]
    InvalidCollection(String),

    #[error("Invalid expiration_secs: {0}. Must be between 1 and {MAX_EXPIRATION_SECS}")]
    InvalidExpiration(u64),

    #[error("Invalid max_capacity: {0}. Must be at least 1 when set")]
    InvalidMaxCapacity(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .docstore/config.yaml (project config, created by init)
    /// 3. .docstore/local.yaml (project local overrides, optional)
    /// 4. Environment variables (DOCSTORE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let dir = Path::new(PROJECT_CONFIG_DIR);
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(&figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file in place of the project files.
    /// Environment variables still take precedence.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(&figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn extract(figment: &Figment) -> Result<Config> {
        let config: Config = figment.extract()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        let collection = &config.storage.collection;
        if collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        if collection == "."
            || collection == ".."
            || collection.contains(['/', '\\', '\0'])
        {
            return Err(ConfigError::InvalidCollection(collection.clone()));
        }

        let expiration = config.cache.expiration_secs;
        if expiration == 0 || expiration > MAX_EXPIRATION_SECS {
            return Err(ConfigError::InvalidExpiration(expiration));
        }
        if let Some(0) = config.cache.max_capacity {
            return Err(ConfigError::InvalidMaxCapacity(0));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
