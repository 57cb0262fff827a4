// src/time/mod.rs

/// Injectable "now".
pub mod clock;
/// Display formatting for boundaries.
pub mod format;
/// Inclusive interval matching.
pub mod matcher;
/// Boundary string parsing.
pub mod parse;

pub use clock::{Clock, FixedClock, SystemClock, TimezonePolicy};
pub use format::{format_instant, DisplayDate, NOT_AVAILABLE};
pub use matcher::{check_interval, is_active};
pub use parse::{parse_timestamp, stringify_timestamp};
