// src/time/clock.rs

use chrono::{FixedOffset, Local, NaiveDateTime, Utc};

use crate::error::{DashaError, Result};
use crate::types::time::{ClockConfig, TimezoneKind};

/// Source of the current wall-clock instant.
///
/// Injected into [`crate::api::service::DashaService`] so tests and the CLI can pin "now".
pub trait Clock {
    /// Current instant as naive wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// How the system clock is projected into wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimezonePolicy {
    /// Device local time.
    Local,
    /// UTC.
    Utc,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
    /// A named IANA zone.
    #[cfg(feature = "timezones")]
    Named(chrono_tz::Tz),
}

impl TimezonePolicy {
    /// Builds the policy described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::InvalidInput` if the offset is out of range, the
    /// zone name is unknown, or a named zone is requested without the
    /// `timezones` feature.
    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        match config.timezone {
            TimezoneKind::Local => Ok(TimezonePolicy::Local),
            TimezoneKind::Utc => Ok(TimezonePolicy::Utc),
            TimezoneKind::Fixed => config
                .fixed_offset_minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map(TimezonePolicy::Fixed)
                .ok_or_else(|| {
                    DashaError::invalid_input(format!(
                        "fixed offset of {} minutes is out of range",
                        config.fixed_offset_minutes
                    ))
                }),
            TimezoneKind::Named => Self::named(&config.tz_name),
        }
    }

    #[cfg(feature = "timezones")]
    fn named(name: &str) -> Result<Self> {
        name.parse::<chrono_tz::Tz>()
            .map(TimezonePolicy::Named)
            .map_err(|e| DashaError::invalid_input(format!("unknown timezone '{}': {}", name, e)))
    }

    #[cfg(not(feature = "timezones"))]
    fn named(name: &str) -> Result<Self> {
        Err(DashaError::invalid_input(format!(
            "timezone '{}' requires the `timezones` feature",
            name
        )))
    }
}

/// Reads the system clock through a [`TimezonePolicy`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    policy: TimezonePolicy,
}

impl SystemClock {
    /// Create a clock using `policy`.
    pub fn new(policy: TimezonePolicy) -> Self {
        Self { policy }
    }

    /// Create a clock from configuration.
    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        Ok(Self::new(TimezonePolicy::from_config(config)?))
    }

    /// The active policy.
    pub fn policy(&self) -> TimezonePolicy {
        self.policy
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(TimezonePolicy::Local)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.policy {
            TimezonePolicy::Local => Local::now().naive_local(),
            TimezonePolicy::Utc => Utc::now().naive_utc(),
            TimezonePolicy::Fixed(offset) => Utc::now().with_timezone(&offset).naive_local(),
            #[cfg(feature = "timezones")]
            TimezonePolicy::Named(tz) => Utc::now().with_timezone(&tz).naive_local(),
        }
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
