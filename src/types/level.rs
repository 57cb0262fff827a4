// src/types/level.rs

use crate::error::DashaError;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The five nested dasha levels, ordered from the longest span (Major) to the
/// shortest (Sub-sub-sub-minor).
///
/// `Display` renders the user-facing name; `FromStr` accepts the display name,
/// the backend field name (`MahaDasha`, ...) or a snake_case form, ignoring
/// ASCII case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DashaLevel {
    /// Level 0: Mahadasha.
    #[strum(to_string = "Major", serialize = "MahaDasha")]
    Major,
    /// Level 1: Antardasha.
    #[strum(to_string = "Minor", serialize = "AntarDasha")]
    Minor,
    /// Level 2: Pratyantardasha.
    #[strum(to_string = "Sub-minor", serialize = "PratyantarDasha", serialize = "sub_minor")]
    SubMinor,
    /// Level 3: Sookshmadasha.
    #[strum(
        to_string = "Sub-sub-minor",
        serialize = "SookshmaDasha",
        serialize = "sub_sub_minor"
    )]
    SubSubMinor,
    /// Level 4: Pranadasha.
    #[strum(
        to_string = "Sub-sub-sub-minor",
        serialize = "PranDasha",
        serialize = "sub_sub_sub_minor"
    )]
    SubSubSubMinor,
}

impl DashaLevel {
    /// All levels in resolution order.
    pub fn ordered() -> impl Iterator<Item = DashaLevel> {
        DashaLevel::iter()
    }

    /// Converts a numeric depth (0-4) to a `DashaLevel` variant.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::UnknownLevel` if `level_num` is greater than 4.
    pub fn from_level_num(level_num: u8) -> Result<Self, DashaError> {
        match level_num {
            0 => Ok(DashaLevel::Major),
            1 => Ok(DashaLevel::Minor),
            2 => Ok(DashaLevel::SubMinor),
            3 => Ok(DashaLevel::SubSubMinor),
            4 => Ok(DashaLevel::SubSubSubMinor),
            _ => Err(DashaError::UnknownLevel(format!("depth {}", level_num))),
        }
    }

    /// Converts a `DashaLevel` variant to its numeric depth (0-4).
    pub fn to_level_num(&self) -> u8 {
        match self {
            DashaLevel::Major => 0,
            DashaLevel::Minor => 1,
            DashaLevel::SubMinor => 2,
            DashaLevel::SubSubMinor => 3,
            DashaLevel::SubSubSubMinor => 4,
        }
    }

    /// Field name used by the backend for this level.
    pub const fn wire_name(self) -> &'static str {
        match self {
            DashaLevel::Major => "MahaDasha",
            DashaLevel::Minor => "AntarDasha",
            DashaLevel::SubMinor => "PratyantarDasha",
            DashaLevel::SubSubMinor => "SookshmaDasha",
            DashaLevel::SubSubSubMinor => "PranDasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            DashaLevel::Major => Some(DashaLevel::Minor),
            DashaLevel::Minor => Some(DashaLevel::SubMinor),
            DashaLevel::SubMinor => Some(DashaLevel::SubSubMinor),
            DashaLevel::SubSubMinor => Some(DashaLevel::SubSubSubMinor),
            DashaLevel::SubSubSubMinor => None,
        }
    }
}
