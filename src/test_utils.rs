// src/test_utils.rs

#![cfg(test)] // Ensure this module is only compiled for tests

use std::cell::RefCell;
use std::sync::Once;

use chrono::NaiveDateTime;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::Config;
use crate::core::hierarchy::Hierarchy;
use crate::time::parse::parse_timestamp;
use crate::types::{DashaLevel, PeriodRecord};

/// Parses a boundary-format literal, panicking on bad test input.
pub fn at(raw: &str) -> NaiveDateTime {
    parse_timestamp(raw).unwrap_or_else(|e| panic!("bad test timestamp {raw:?}: {e}"))
}

/// Default configuration with a remote icon base set.
pub fn get_test_config() -> Config {
    let mut config = Config::default();
    config.icons.remote_base_url = Some("https://cdn.example.com/planets/".to_string());
    config
}

/// A legacy-style hierarchy where, at `15-6-2020  12:0`, Major, Minor and
/// Sub-minor are active and Sub-sub-minor holds only past periods.
pub fn sample_hierarchy() -> Hierarchy {
    Hierarchy::new()
        .with_level(
            DashaLevel::Major,
            vec![
                PeriodRecord::new("Venus", "1-1-2000  0:0", "31-12-2019  23:59"),
                PeriodRecord::new("Sun", "1-1-2020  0:0", "31-12-2025  23:59"),
            ],
        )
        .with_level(
            DashaLevel::Minor,
            vec![PeriodRecord::new("Moon", "1-3-2020  0:0", "30-9-2020  23:59")],
        )
        .with_level(
            DashaLevel::SubMinor,
            vec![
                PeriodRecord::new("Mars", "1-5-2020  0:0", "31-5-2020  23:59"),
                PeriodRecord::new("Rahu", "1-6-2020  0:0", "30-6-2020  23:59"),
            ],
        )
        .with_level(
            DashaLevel::SubSubMinor,
            vec![PeriodRecord::new("Ketu", "1-1-2019  0:0", "2-1-2019  0:0")],
        )
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Records log lines into a per-thread buffer so parallel tests stay apart.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|lines| {
            lines
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Runs `f` and returns what it logged on the current thread.
pub fn capture_logs<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE_LOGGER).expect("no other logger in unit tests");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
    f();
    CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect())
}
