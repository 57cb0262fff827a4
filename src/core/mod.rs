// src/core/mod.rs

/// Normalized dasha hierarchy.
pub mod hierarchy;
/// Planet icon fallback chain.
pub mod icon;
/// Member selection and filtering.
pub mod member;
/// Active-period resolution.
pub mod resolver;
/// Per-level period tables.
pub mod table;

pub use hierarchy::Hierarchy;
pub use icon::{IconResolver, IconSource, IconTier};
pub use member::{filter_members, primary_member, Member};
pub use resolver::{resolve_active, ActivePeriod, OverviewRow, Resolution};
pub use table::{period_table, TableRow};
