// src/core/member.rs

use serde::{Deserialize, Serialize};

/// A family member profile attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this is the account's featured profile.
    #[serde(default, alias = "isPrimary")]
    pub is_primary: bool,
}

/// The member to show by default: the first one flagged primary, otherwise
/// the first member.
pub fn primary_member(members: &[Member]) -> Option<&Member> {
    members.iter().find(|m| m.is_primary).or_else(|| {
        let first = members.first();
        if let Some(member) = first {
            log::debug!("No primary member flagged, defaulting to '{}'", member.name);
        }
        first
    })
}

/// Members whose name contains `query`, ignoring case. A blank query keeps
/// everyone. Order is preserved.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
        .collect()
}
