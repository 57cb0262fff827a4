use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which wall clock "now" is read from before comparing it with dasha
/// boundaries.
///
/// Boundaries carry no timezone, so this only decides how the current instant
/// is projected into naive wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimezoneKind {
    /// Device local time
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed offset from UTC (`clock.fixed_offset_minutes`)
    Fixed,
    /// A named IANA zone (`clock.tz_name`), requires the `timezones` feature
    Named,
}

/// Clock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Timezone policy used to read "now"
    pub timezone: TimezoneKind,
    /// Offset east of UTC in minutes, used when `timezone = "fixed"`
    #[serde(default)]
    pub fixed_offset_minutes: i32,
    /// IANA zone name, used when `timezone = "named"`
    #[serde(default)]
    pub tz_name: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: TimezoneKind::Local,
            fixed_offset_minutes: 0,
            tz_name: String::new(),
        }
    }
}
