//! Configuration validation
//!
//! This module contains functions for validating the application configuration
//! to ensure all values are within acceptable ranges and consistent with each other.

use url::Url;

use super::error::ConfigError;
use super::{ClockConfig, Config, IconConfig, LoggingConfig, OverviewConfig, TimezoneKind};
use crate::error::DashaError;
use crate::time::clock::TimezonePolicy;
use crate::LogLevel;

/// Largest UTC offset any real timezone uses, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Largest accepted carousel page.
pub const MAX_PAGE_SIZE: usize = 50;

/// Validates the application configuration.
///
/// Each section is checked in turn; the first failure is returned.
///
/// # Errors
///
/// Returns `DashaError::ConfigError` if any validation check fails.
pub fn validate_config(config: &Config) -> Result<(), DashaError> {
    validate_logging_config(&config.logging)?;
    validate_clock_config(&config.clock)?;
    validate_icon_config(&config.icons)?;
    validate_overview_config(&config.overview)?;
    Ok(())
}

/// Validates the logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), DashaError> {
    if !config.console && config.level != LogLevel::Off {
        log::warn!(
            "Console logging is disabled but level is '{}'. No logs will be captured.",
            config.level
        );
    }
    Ok(())
}

/// Validates the clock configuration.
fn validate_clock_config(config: &ClockConfig) -> Result<(), DashaError> {
    match config.timezone {
        TimezoneKind::Local | TimezoneKind::Utc => {
            if !config.tz_name.is_empty() {
                log::warn!(
                    "clock.tz_name '{}' is ignored unless clock.timezone = \"named\"",
                    config.tz_name
                );
            }
        }
        TimezoneKind::Fixed => {
            if config.fixed_offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES.unsigned_abs() {
                return Err(ConfigError::invalid_value(
                    "clock.fixed_offset_minutes",
                    config.fixed_offset_minutes,
                    format!("Offset must be within ±{} minutes", MAX_OFFSET_MINUTES),
                )
                .into());
            }
        }
        TimezoneKind::Named => {
            if config.tz_name.trim().is_empty() {
                return Err(ConfigError::missing_value("clock.tz_name").into());
            }
            if let Err(e) = TimezonePolicy::from_config(config) {
                return Err(ConfigError::invalid_value("clock.tz_name", &config.tz_name, e.to_string()).into());
            }
        }
    }
    Ok(())
}

/// Validates the icon configuration.
fn validate_icon_config(config: &IconConfig) -> Result<(), DashaError> {
    if config.static_dir.trim().is_empty() {
        return Err(ConfigError::missing_value("icons.static_dir").into());
    }
    if config.generic_icon.trim().is_empty() {
        return Err(ConfigError::missing_value("icons.generic_icon").into());
    }

    if let Some(raw) = config.remote_base_url.as_deref() {
        let url = Url::parse(raw.trim()).map_err(|e| {
            ConfigError::invalid_value("icons.remote_base_url", raw, format!("Invalid URL: {}", e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_value(
                "icons.remote_base_url",
                raw,
                "Only http and https URLs are supported",
            )
            .into());
        }
        if !url.path().ends_with('/') {
            log::warn!(
                "icons.remote_base_url '{}' has no trailing slash; its last path segment will be replaced when joining icon paths",
                raw
            );
        }
    }
    Ok(())
}

/// Validates the overview configuration.
fn validate_overview_config(config: &OverviewConfig) -> Result<(), DashaError> {
    if config.page_size == 0 || config.page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::invalid_value(
            "overview.page_size",
            config.page_size,
            format!("Page size must be between 1 and {}", MAX_PAGE_SIZE),
        )
        .into());
    }
    Ok(())
}
