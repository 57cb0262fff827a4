// src/api/service.rs

use crate::api::wire::normalize_response;
use crate::config::Config;
use crate::core::hierarchy::Hierarchy;
use crate::core::icon::{IconResolver, IconSource};
use crate::core::resolver::{resolve_active, OverviewRow, Resolution};
use crate::core::table::{period_table, TableRow};
use crate::error::Result as DashaResult;
use crate::time::clock::{Clock, SystemClock};
use crate::types::DashaLevel;

/// Entry point for screens that show dasha data.
///
/// Built once at startup from a [`Config`] and a [`Clock`], then passed by
/// reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct DashaService<C: Clock> {
    clock: C,
    icons: IconResolver,
    page_size: usize,
}

impl DashaService<SystemClock> {
    /// Creates a service reading the system clock with the configured
    /// timezone policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock or icon configuration is unusable.
    pub fn from_config(config: &Config) -> DashaResult<Self> {
        let clock = SystemClock::from_config(&config.clock)?;
        Self::with_clock(config, clock)
    }
}

impl<C: Clock> DashaService<C> {
    /// Creates a service with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the icon configuration is unusable.
    pub fn with_clock(config: &Config, clock: C) -> DashaResult<Self> {
        Ok(Self {
            clock,
            icons: IconResolver::new(&config.icons)?,
            page_size: config.overview.page_size,
        })
    }

    /// The clock this service reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Active periods of `hierarchy` right now.
    pub fn overview(&self, hierarchy: &Hierarchy) -> Resolution {
        resolve_active(hierarchy, self.clock.now())
    }

    /// Normalizes a raw backend body and resolves it.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::SerdeJson` if the body cannot be normalized.
    /// Individual bad records never fail this call.
    pub fn overview_from_json(&self, body: &str) -> DashaResult<Resolution> {
        let hierarchy = normalize_response(body)?;
        Ok(self.overview(&hierarchy))
    }

    /// Full table for one level with the current row flagged.
    pub fn table(&self, hierarchy: &Hierarchy, level: DashaLevel) -> Vec<TableRow> {
        period_table(hierarchy, level, self.clock.now())
    }

    /// Icon for a planet, preferring the backend-provided path.
    pub fn icon(&self, planet: &str, api_path: Option<&str>) -> IconSource {
        self.icons.resolve(planet, api_path)
    }

    /// Number of carousel pages for `resolution`.
    pub fn carousel_pages(&self, resolution: &Resolution) -> usize {
        resolution.page_count(self.page_size)
    }

    /// One carousel page of `resolution`.
    pub fn carousel_page(&self, resolution: &Resolution, index: usize) -> Vec<OverviewRow> {
        resolution.page(index, self.page_size)
    }
}
