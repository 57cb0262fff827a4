// src/core/icon.rs

//! Planet icon lookup with an explicit fallback chain:
//! API-provided path, then the bundled per-planet asset, then a generic asset.
//! Every downgrade is logged so a missing data source shows up in the logs.

use std::str::FromStr;

use url::Url;

use crate::config::IconConfig;
use crate::error::{DashaError, Result};
use crate::types::Planet;

/// Which tier of the fallback chain produced an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTier {
    /// Path supplied by the backend.
    Api,
    /// Bundled asset for the planet.
    Static,
    /// Bundled generic asset.
    Generic,
}

/// A resolved icon location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Tier that supplied the icon.
    pub tier: IconTier,
    /// URL or asset path to load.
    pub location: String,
}

/// Resolves planet icons according to [`IconConfig`].
#[derive(Debug, Clone)]
pub struct IconResolver {
    remote_base: Option<Url>,
    static_dir: String,
    generic_icon: String,
}

impl IconResolver {
    /// Create a resolver from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::InvalidInput` if `remote_base_url` is set but is not
    /// an absolute URL.
    pub fn new(config: &IconConfig) -> Result<Self> {
        let remote_base = match config.remote_base_url.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(Url::parse(raw.trim()).map_err(|e| {
                DashaError::invalid_input(format!("icons.remote_base_url '{}': {}", raw, e))
            })?),
            _ => None,
        };
        Ok(Self {
            remote_base,
            static_dir: config.static_dir.trim_end_matches('/').to_string(),
            generic_icon: config.generic_icon.clone(),
        })
    }

    /// Icon for `planet`, preferring `api_path` when it is usable.
    pub fn resolve(&self, planet: &str, api_path: Option<&str>) -> IconSource {
        if let Some(location) = self.from_api(planet, api_path) {
            return IconSource {
                tier: IconTier::Api,
                location,
            };
        }

        match Planet::from_str(planet.trim()) {
            Ok(known) => IconSource {
                tier: IconTier::Static,
                location: format!("{}/{}.png", self.static_dir, known.asset_stem()),
            },
            Err(_) => {
                log::warn!("No bundled icon for unknown planet '{}', using generic icon", planet);
                IconSource {
                    tier: IconTier::Generic,
                    location: self.generic_icon.clone(),
                }
            }
        }
    }

    fn from_api(&self, planet: &str, api_path: Option<&str>) -> Option<String> {
        let path = match api_path.map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => {
                log::debug!("No API icon for '{}', falling back to bundled asset", planet);
                return None;
            }
        };

        match Url::parse(path) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url.into()),
            Ok(url) => {
                log::warn!(
                    "API icon for '{}' uses unsupported scheme '{}', falling back",
                    planet,
                    url.scheme()
                );
                None
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.remote_base {
                Some(base) => match base.join(path) {
                    Ok(url) => Some(url.into()),
                    Err(e) => {
                        log::warn!("API icon path '{}' for '{}' unusable: {}, falling back", path, planet, e);
                        None
                    }
                },
                None => {
                    log::warn!(
                        "API icon path '{}' for '{}' is relative and no remote base is configured, falling back",
                        path,
                        planet
                    );
                    None
                }
            },
            Err(e) => {
                log::warn!("API icon path '{}' for '{}' unusable: {}, falling back", path, planet, e);
                None
            }
        }
    }
}
