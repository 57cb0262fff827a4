//! Error types for dasha overview resolution
//!
//! This module defines the error types used throughout the crate. The main
//! error type is `DashaError`. Record-level variants (`MalformedTimestamp`,
//! `InvalidInterval`) are normally contained by the resolver and reported as
//! diagnostics; boundary variants (`SerdeJson`, `ConfigError`, ...) reach the
//! caller.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Main error type for dasha overview resolution
#[derive(Error, Debug)]
pub enum DashaError {
    /// A raw boundary string does not match `D-M-YYYY  H:m`
    #[error("Malformed timestamp '{raw}': {reason}")]
    MalformedTimestamp {
        /// The string exactly as received.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A period whose start lies after its end
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        /// Parsed start boundary.
        start: NaiveDateTime,
        /// Parsed end boundary.
        end: NaiveDateTime,
    },

    /// Unrecognised dasha level name
    #[error("Unknown dasha level: {0}")]
    UnknownLevel(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error (JSON): {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that can fail with a [DashaError]
pub type Result<T> = std::result::Result<T, DashaError>;

impl DashaError {
    /// Create a new error with a string message
    pub fn new<S: Into<String>>(msg: S) -> Self {
        DashaError::InvalidInput(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        DashaError::InvalidInput(msg.into())
    }

    /// Create a new malformed timestamp error
    pub fn malformed_timestamp<R: Into<String>, S: Into<String>>(raw: R, reason: S) -> Self {
        DashaError::MalformedTimestamp {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid interval error
    pub fn invalid_interval(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DashaError::InvalidInterval { start, end }
    }

    /// Whether this error describes a single bad record, as opposed to an
    /// unusable response or configuration.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            DashaError::MalformedTimestamp { .. } | DashaError::InvalidInterval { .. }
        )
    }
}

impl From<&str> for DashaError {
    fn from(s: &str) -> Self {
        DashaError::new(s)
    }
}

impl From<String> for DashaError {
    fn from(s: String) -> Self {
        DashaError::new(s)
    }
}
