// src/time/matcher.rs

use chrono::NaiveDateTime;

use crate::error::{DashaError, Result};

/// Returns true when `start <= now <= end`.
///
/// An inverted interval (`start > end`) never matches; it is logged as a
/// data-quality warning instead of failing, so one bad record cannot take
/// down the rest of a screen.
pub fn is_active(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    match check_interval(now, start, end) {
        Ok(active) => active,
        Err(e) => {
            log::warn!("Ignoring dasha period: {}", e);
            false
        }
    }
}

/// Same test as [`is_active`], but reports an inverted interval.
///
/// # Errors
///
/// Returns `DashaError::InvalidInterval` when `start > end`.
pub fn check_interval(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> Result<bool> {
    if start > end {
        return Err(DashaError::invalid_interval(start, end));
    }
    Ok(start <= now && now <= end)
}
