//! Configuration loader
//!
//! Loads configuration from defaults, an optional TOML file and
//! environment variables, using Figment for source merging.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use ctb_domain::error::{Error, Result};

use crate::config::types::{AppConfig, CONFIG_ENV_PREFIX};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Default configuration file looked up when no path is given
const DEFAULT_CONFIG_FILE: &str = "ctb.toml";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `CTB_LOGGING_LEVEL`)
    ///
    /// Environment variables address nested keys with `_`, so only fields
    /// whose names contain no underscore are reachable this way;
    /// `app_name` and `logging.json_format` come from defaults or the
    /// TOML file only.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
                log_config_loaded(default_path, true);
            }
        }

        // Underscore-separated nested keys, e.g. CTB_LOGGING_LEVEL
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validate a loaded configuration
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.app_name.trim().is_empty() {
            return Err(Error::invalid_argument("app_name must not be empty"));
        }
        parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
