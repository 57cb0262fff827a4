// src/core/table.rs

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::hierarchy::Hierarchy;
use crate::time::format::DisplayDate;
use crate::types::DashaLevel;

/// One row of a dasha level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Ruling planet.
    pub planet: String,
    /// Start boundary.
    pub start_display: DisplayDate,
    /// End boundary.
    pub end_display: DisplayDate,
    /// Whether to highlight this row as the current period.
    pub is_active: bool,
}

/// Every period of `level` in source order, with the current one flagged.
///
/// At most one row is active: the first match, as in
/// [`crate::core::resolver::resolve_active`]. Rows whose boundaries do not
/// parse show the "Not Available" sentinel and are never active.
pub fn period_table(hierarchy: &Hierarchy, level: DashaLevel, now: NaiveDateTime) -> Vec<TableRow> {
    let mut found = false;
    hierarchy
        .periods(level)
        .iter()
        .map(|record| {
            let is_active = !found
                && match record.parse(level) {
                    Ok(period) => period.contains(now),
                    Err(e) => {
                        log::warn!("Table row for {} ({}) unusable: {}", level, record.planet, e);
                        false
                    }
                };
            found |= is_active;
            TableRow {
                planet: record.planet.clone(),
                start_display: DisplayDate::from_raw(&record.start),
                end_display: DisplayDate::from_raw(&record.end),
                is_active,
            }
        })
        .collect()
}
