use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::time::{matcher, parse};
use crate::types::level::DashaLevel;

/// One dasha period exactly as the backend sent it.
///
/// Missing, `null` or non-string fields deserialize to empty strings so a
/// single incomplete record fails later, during parsing, instead of
/// rejecting the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Ruling planet name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub planet: String,
    /// Start boundary, `D-M-YYYY  H:m`.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        alias = "start_time",
        alias = "startTime"
    )]
    pub start: String,
    /// End boundary, `D-M-YYYY  H:m`.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        alias = "end_time",
        alias = "endTime"
    )]
    pub end: String,
}

/// Accepts any JSON value; anything but a string becomes `""`.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => {
            log::debug!("Treating non-string period field {} as empty", other);
            Ok(String::new())
        }
    }
}

impl PeriodRecord {
    /// Create a new record from raw strings.
    pub fn new(planet: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            planet: planet.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both boundaries, tagging the result with `level`.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::MalformedTimestamp` if either boundary is malformed.
    pub fn parse(&self, level: DashaLevel) -> Result<Period> {
        Ok(Period {
            planet: self.planet.clone(),
            level,
            start: parse::parse_timestamp(&self.start)?,
            end: parse::parse_timestamp(&self.end)?,
        })
    }
}

/// A parsed dasha period with comparable boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Ruling planet name.
    pub planet: String,
    /// Level this period belongs to.
    pub level: DashaLevel,
    /// Start boundary, inclusive.
    pub start: NaiveDateTime,
    /// End boundary, inclusive.
    pub end: NaiveDateTime,
}

impl Period {
    /// Whether `now` falls within this period, boundaries included.
    pub fn contains(&self, now: NaiveDateTime) -> bool {
        matcher::is_active(now, self.start, self.end)
    }

    /// Like [`Period::contains`], but reports an inverted interval as an error.
    pub fn check(&self, now: NaiveDateTime) -> Result<bool> {
        matcher::check_interval(now, self.start, self.end)
    }
}
