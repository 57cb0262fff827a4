//! Core type definitions for dasha overview resolution

mod log_level;
/// Dasha levels and their names.
pub mod level;
/// Raw and parsed dasha periods.
pub mod period;
/// Ruling planets.
pub mod planet;
/// Contains types related to clocks and timezone policy.
pub mod time;

pub use level::DashaLevel;
pub use log_level::LogLevel;
pub use period::{Period, PeriodRecord};
pub use planet::Planet;
pub use time::*;
