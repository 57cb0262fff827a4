//! Configuration errors
//!
//! `ConfigError` covers reading, parsing, overriding and validating the TOML
//! configuration. It converts into [`crate::error::DashaError`] at the crate
//! boundary.

use std::io;
use thiserror::Error;

/// Why a configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid TOML or does not match the config schema.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A required value is empty or absent.
    #[error("Missing required configuration: {0}")]
    MissingValue(String),

    /// A value is present but out of range or malformed.
    #[error("Invalid value for '{field}': '{value}'. {reason}")]
    InvalidValue {
        /// Dotted field name, e.g. `overview.page_size`.
        field: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Any other failure surfaced during validation.
    #[error("Configuration error: {0}")]
    Other(String),
}

impl ConfigError {
    /// Rejects `value` for `field`.
    pub fn invalid_value<S1, S2, S3>(field: S1, value: S2, reason: S3) -> Self
    where
        S1: Into<String>,
        S2: std::fmt::Display,
        S3: Into<String>,
    {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Reports `field` as missing.
    pub fn missing_value<S: Into<String>>(field: S) -> Self {
        ConfigError::MissingValue(field.into())
    }

    /// The offending field, for value-level errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { field, .. } => Some(field.as_str()),
            ConfigError::MissingValue(field) => Some(field.as_str()),
            _ => None,
        }
    }
}
