use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The nine bodies that rule dasha periods.
///
/// Parsing accepts English and Sanskrit names in any ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Planet {
    /// Surya
    #[strum(to_string = "Sun", serialize = "Surya")]
    Sun,
    /// Chandra
    #[strum(to_string = "Moon", serialize = "Chandra")]
    Moon,
    /// Mangal
    #[strum(to_string = "Mars", serialize = "Mangal")]
    Mars,
    /// Budh
    #[strum(to_string = "Mercury", serialize = "Budh", serialize = "Buddh")]
    Mercury,
    /// Guru
    #[strum(to_string = "Jupiter", serialize = "Guru")]
    Jupiter,
    /// Shukra
    #[strum(to_string = "Venus", serialize = "Shukra")]
    Venus,
    /// Shani
    #[strum(to_string = "Saturn", serialize = "Shani")]
    Saturn,
    /// North lunar node
    Rahu,
    /// South lunar node
    Ketu,
}

impl Planet {
    /// Lowercase English name, used as the stem of bundled icon assets.
    pub fn asset_stem(self) -> String {
        self.to_string().to_lowercase()
    }
}
