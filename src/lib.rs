// src/lib.rs

//! Active dasha period resolution for horoscope clients.
//!
//! Backend responses are normalized into a [`Hierarchy`], resolved against
//! "now" into a [`Resolution`], and rendered into rows whose dates all go
//! through one display format.
//!
//! ```
//! use dasha_overview::{normalize_response, resolve_active, parse_timestamp};
//!
//! let body = r#"{"MahaDasha": {"planet": "Sun", "start": "1-1-2020  0:0", "end": "31-12-2020  23:59"}}"#;
//! let hierarchy = normalize_response(body).unwrap();
//! let now = parse_timestamp("15-6-2020  12:0").unwrap();
//! let rows = resolve_active(&hierarchy, now).rows();
//! assert_eq!(rows[0].level, "Major");
//! assert_eq!(rows[0].start_display.as_str(), "Jan 1, 2020");
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use api::{normalize_response, DashaService};
pub use config::Config;
pub use crate::core::{resolve_active, Hierarchy, OverviewRow, Resolution, TableRow};
pub use error::{DashaError, Result as DashaResult};
pub use time::{is_active, parse_timestamp, Clock, DisplayDate, FixedClock, SystemClock};
pub use types::{DashaLevel, LogLevel, Period, PeriodRecord, Planet};

/// File name looked up in the working directory when no config path is given
/// and no OS config directory is available.
pub const DEFAULT_CONFIG_FILE: &str = "dasha-overview.toml";

/// Loads configuration and installs the console logger.
///
/// `config_path` falls back to [`Config::default_path`], then to
/// [`DEFAULT_CONFIG_FILE`]. A missing file yields the default configuration.
/// The returned `Config` is owned by the caller and passed on explicitly; the
/// logger is the only process-wide state this touches.
///
/// # Errors
///
/// Returns `DashaError::ConfigError` if the configuration cannot be loaded and
/// `DashaError::InvalidInput` if a logger has already been installed.
pub fn init(config_path: Option<&str>) -> DashaResult<Config> {
    let path = match config_path {
        Some(path) => std::path::PathBuf::from(path),
        None => Config::default_path().unwrap_or_else(|| DEFAULT_CONFIG_FILE.into()),
    };
    let config = Config::load(&path)?;

    #[cfg(feature = "logging")]
    if config.logging.console {
        env_logger::Builder::new()
            .filter_level(config.logging.level.to_level_filter())
            .parse_default_env()
            .try_init()
            .map_err(|e| DashaError::invalid_input(format!("Logger already initialized: {}", e)))?;
    }

    log::info!(
        "dasha-overview initialised from {} (timezone: {})",
        path.display(),
        config.clock.timezone
    );
    Ok(config)
}
