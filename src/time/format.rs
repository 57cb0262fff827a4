// src/time/format.rs

//! The single display format for dasha boundaries.
//!
//! Every user-facing boundary goes through [`DisplayDate`], so rows cannot
//! be built from ad hoc date strings.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::time::parse::parse_timestamp;

/// `strftime` pattern for boundaries, e.g. `Jun 6, 2020`.
pub const DISPLAY_PATTERN: &str = "%b %-d, %Y";

/// Shown in place of a boundary that could not be parsed.
pub const NOT_AVAILABLE: &str = "Not Available";

/// A boundary rendered for display, or the "Not Available" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayDate(Option<String>);

impl DisplayDate {
    /// The sentinel value.
    pub fn not_available() -> Self {
        DisplayDate(None)
    }

    /// Parses a raw boundary and formats it, falling back to the sentinel.
    pub fn from_raw(raw: &str) -> Self {
        match parse_timestamp(raw) {
            Ok(instant) => Self::from(instant),
            Err(e) => {
                log::debug!("Rendering boundary as not available: {}", e);
                Self::not_available()
            }
        }
    }

    /// Whether this holds a real date rather than the sentinel.
    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// The text to render.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl From<NaiveDateTime> for DisplayDate {
    fn from(instant: NaiveDateTime) -> Self {
        DisplayDate(Some(instant.format(DISPLAY_PATTERN).to_string()))
    }
}

impl From<Option<NaiveDateTime>> for DisplayDate {
    fn from(instant: Option<NaiveDateTime>) -> Self {
        match instant {
            Some(instant) => DisplayDate(Some(instant.format(DISPLAY_PATTERN).to_string())),
            None => Self::not_available(),
        }
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Formats an optional instant with the display pattern.
pub fn format_instant(instant: Option<NaiveDateTime>) -> String {
    DisplayDate::from(instant).to_string()
}
