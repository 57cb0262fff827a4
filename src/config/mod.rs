//! Configuration management for dasha overview resolution
//!
//! This module handles loading, validating, and providing access to the
//! application configuration. It supports loading configuration from files,
//! environment variables, and programmatic overrides.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

// Publicly re-export key configuration types from the types module
pub use crate::types::time::{ClockConfig, TimezoneKind};

use std::{
    env,
    fs,
    path::{Path, PathBuf},
};
use directories::ProjectDirs;

use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "DASHA_";

/// The application name used for finding config directories
const APP_NAME: &str = "dasha-overview";

/// Main configuration structure.
///
/// It can be loaded from a TOML file, environment variables, or created
/// programmatically. Sections missing from a file take their defaults.
///
/// # Example
///
/// ```no_run
/// use dasha_overview::config::Config;
///
/// // A path that does not exist falls back to defaults.
/// let config = Config::load("path/that/hopefully/does/not/exist.toml").unwrap();
/// assert_eq!(config.overview.page_size, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// How "now" is read
    pub clock: ClockConfig,

    /// Planet icon sources
    pub icons: IconConfig,

    /// Overview presentation
    pub overview: OverviewConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
    /// Whether to log to the console
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: true,
        }
    }
}

/// Planet icon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Base URL that relative API icon paths are joined onto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_base_url: Option<String>,
    /// Directory of bundled per-planet icons
    pub static_dir: String,
    /// Bundled icon used when nothing better is available
    pub generic_icon: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            remote_base_url: None,
            static_dir: "assets/planets".to_string(),
            generic_icon: "assets/planets/generic.png".to_string(),
        }
    }
}

/// Overview presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverviewConfig {
    /// Rows per carousel page
    pub page_size: usize,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self { page_size: 3 }
    }
}

impl Config {
    /// Loads the configuration from the specified path.
    ///
    /// The configuration is assembled in the following order:
    /// 1. From the specified file path, if it exists
    /// 2. From built-in defaults otherwise
    /// 3. Environment variables with the `DASHA_` prefix override either
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or
    /// parsed, if an environment override is invalid, or if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config = match fs::read_to_string(path) {
            Ok(config_str) => toml::from_str::<Config>(&config_str)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file not found at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::error!("Failed to read config file {}: {}", path.display(), e);
                return Err(e.into());
            }
        };

        // Apply environment variable overrides
        config.apply_env_vars()?;

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Environment variables are prefixed with `DASHA_` and use `_` as a
    /// separator, e.g. `DASHA_LOGGING_LEVEL=debug`,
    /// `DASHA_CLOCK_TIMEZONE=utc`, `DASHA_OVERVIEW_PAGE_SIZE=5`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars() {
            let Some(stripped) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            // Skip empty values
            if value.trim().is_empty() {
                continue;
            }

            match stripped.to_lowercase().as_str() {
                "logging_level" => {
                    self.logging.level = value.parse().map_err(|_| {
                        ConfigError::invalid_value("logging.level", &value, "Invalid log level")
                    })?;
                }
                "clock_timezone" => {
                    self.clock.timezone = value.trim().parse().map_err(|_| {
                        ConfigError::invalid_value(
                            "clock.timezone",
                            &value,
                            "Expected one of local, utc, fixed, named",
                        )
                    })?;
                }
                "overview_page_size" => {
                    self.overview.page_size = value.trim().parse().map_err(|_| {
                        ConfigError::invalid_value("overview.page_size", &value, "Expected a positive integer")
                    })?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validation::validate_config(self) {
            Ok(()) => Ok(()),
            Err(dasha_error) => match dasha_error {
                crate::error::DashaError::ConfigError(config_error) => Err(config_error),
                _ => Err(ConfigError::Other(dasha_error.to_string())),
            },
        }
    }

    /// Returns the path to the directory where configuration files should be stored.
    ///
    /// This is OS-specific:
    /// - Linux: `$HOME/.config/dasha-overview`
    /// - macOS: `$HOME/Library/Application Support/com.dasha.dasha-overview`
    /// - Windows: `%APPDATA%\\dasha\\dasha-overview`
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "dasha", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Default config file location inside [`Config::config_dir`].
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}
