// src/core/resolver.rs

//! Active-period resolution across the five dasha levels.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::hierarchy::Hierarchy;
use crate::error::DashaError;
use crate::time::format::DisplayDate;
use crate::types::{DashaLevel, Period, PeriodRecord};

/// The period found active at one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePeriod {
    /// The parsed period.
    pub period: Period,
    /// Position of the matching record in its level's source list.
    pub index: usize,
}

impl ActivePeriod {
    /// Level of the period.
    pub fn level(&self) -> DashaLevel {
        self.period.level
    }

    /// Renders this period for the overview list.
    pub fn to_row(&self) -> OverviewRow {
        OverviewRow {
            level: self.period.level.to_string(),
            planet: self.period.planet.clone(),
            start_display: DisplayDate::from(self.period.start),
            end_display: DisplayDate::from(self.period.end),
        }
    }
}

/// One overview line, ready for a list or carousel widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewRow {
    /// Level display name, e.g. `Major`.
    pub level: String,
    /// Ruling planet.
    pub planet: String,
    /// Start boundary.
    pub start_display: DisplayDate,
    /// End boundary.
    pub end_display: DisplayDate,
}

/// Outcome of resolving a hierarchy at one instant.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Active periods in level order; unmatched levels are omitted.
    pub entries: Vec<ActivePeriod>,
    /// Number of records skipped because they could not be parsed or had an
    /// inverted interval.
    pub skipped: usize,
    /// Why each skipped record was skipped.
    pub diagnostics: Vec<DashaError>,
}

impl Resolution {
    /// True when no level had an active period.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active period at `level`, if any.
    pub fn get(&self, level: DashaLevel) -> Option<&ActivePeriod> {
        self.entries.iter().find(|entry| entry.level() == level)
    }

    /// All entries rendered as overview rows.
    pub fn rows(&self) -> Vec<OverviewRow> {
        self.entries.iter().map(ActivePeriod::to_row).collect()
    }

    /// Number of carousel pages of `page_size` rows.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.entries.len().div_ceil(page_size)
    }

    /// Rows on carousel page `index` (zero-based). Out-of-range pages are empty.
    pub fn page(&self, index: usize, page_size: usize) -> Vec<OverviewRow> {
        if page_size == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .map(ActivePeriod::to_row)
            .collect()
    }
}

/// Finds the active period at every level of `hierarchy`.
///
/// Levels are visited from Major down to Sub-sub-sub-minor. Within a level the
/// first record that parses and contains `now` wins; records are not assumed
/// to be sorted. Bad records are logged, counted and skipped. An empty or
/// partial hierarchy yields a shorter result, never an error.
pub fn resolve_active(hierarchy: &Hierarchy, now: NaiveDateTime) -> Resolution {
    let mut resolution = Resolution::default();

    for level in DashaLevel::ordered() {
        let records = hierarchy.periods(level);
        if records.is_empty() {
            continue;
        }
        if let Some(active) = first_active(level, records, now, &mut resolution) {
            resolution.entries.push(active);
        }
    }

    log::debug!(
        "Resolved {} active dasha levels at {} ({} records skipped)",
        resolution.entries.len(),
        now,
        resolution.skipped
    );
    resolution
}

/// Scans `records` in order and returns the first one active at `now`,
/// recording every bad record seen before it.
fn first_active(
    level: DashaLevel,
    records: &[PeriodRecord],
    now: NaiveDateTime,
    resolution: &mut Resolution,
) -> Option<ActivePeriod> {
    for (index, record) in records.iter().enumerate() {
        match record.parse(level).and_then(|period| period.check(now).map(|hit| (period, hit))) {
            Ok((period, true)) => return Some(ActivePeriod { period, index }),
            Ok((_, false)) => {}
            Err(e) => {
                log::warn!(
                    "Skipping {} period #{} ({}): {}",
                    level,
                    index,
                    record.planet,
                    e
                );
                resolution.skipped += 1;
                resolution.diagnostics.push(e);
            }
        }
    }
    None
}
