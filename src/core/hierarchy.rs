// src/core/hierarchy.rs

use std::collections::BTreeMap;

use crate::types::{DashaLevel, PeriodRecord};

/// Normalized dasha hierarchy: the period list for each level present.
///
/// Whatever shape the backend used, every level is held as a list here (a
/// single current period becomes a one-element list), so nothing downstream
/// branches on the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    levels: BTreeMap<DashaLevel, Vec<PeriodRecord>>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the periods of `level`. An empty list removes the level.
    pub fn set_level(&mut self, level: DashaLevel, periods: Vec<PeriodRecord>) {
        if periods.is_empty() {
            self.levels.remove(&level);
        } else {
            self.levels.insert(level, periods);
        }
    }

    /// Builder-style [`Hierarchy::set_level`].
    pub fn with_level(mut self, level: DashaLevel, periods: Vec<PeriodRecord>) -> Self {
        self.set_level(level, periods);
        self
    }

    /// Appends one period to `level`.
    pub fn push(&mut self, level: DashaLevel, period: PeriodRecord) {
        self.levels.entry(level).or_default().push(period);
    }

    /// Periods of `level` in source order; empty when the level is absent.
    pub fn periods(&self, level: DashaLevel) -> &[PeriodRecord] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Present levels in hierarchy order with their periods.
    pub fn iter(&self) -> impl Iterator<Item = (DashaLevel, &[PeriodRecord])> {
        self.levels.iter().map(|(level, periods)| (*level, periods.as_slice()))
    }

    /// Number of levels present.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of period records across all levels.
    pub fn period_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    /// True when no level has any period.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
