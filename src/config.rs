use log::warn;
use std::time::Duration;

use crate::transition::longest_flip;

/// Public path the site is served from (GitHub Pages project site).
pub const BASE_PATH: &str = "/ForbesFolio/";

const DEFAULT_SETTLE_TIMEOUT_MS: u64 = 800;
const MIN_SETTLE_MARGIN_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: String,
    pub brand: &'static str,
    pub brand_accent: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: BASE_PATH.to_string(),
            brand: "Forbes",
            brand_accent: "Folio",
        }
    }
}

impl SiteConfig {
    pub fn asset_url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagazineConfig {
    /// How long a committed page turn may stay in flight before the watchdog
    /// clears it, in case the engine never reports completion.
    pub settle_timeout: Duration,
}

impl Default for MagazineConfig {
    fn default() -> Self {
        Self {
            settle_timeout: Duration::from_millis(DEFAULT_SETTLE_TIMEOUT_MS),
        }
    }
}

impl MagazineConfig {
    /// Raises the settle timeout so it always outlasts the longest flip.
    pub fn validated(self) -> Self {
        let floor = longest_flip() + Duration::from_millis(MIN_SETTLE_MARGIN_MS);
        if self.settle_timeout < floor {
            warn!(
                "Settle timeout of {}ms is shorter than the longest page turn, using {}ms",
                self.settle_timeout.as_millis(),
                floor.as_millis()
            );
            return Self {
                settle_timeout: floor,
            };
        }
        self
    }

    pub fn settle_timeout_ms(&self) -> u32 {
        u32::try_from(self.settle_timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_path() {
        let config = SiteConfig::default();
        assert_eq!(config.asset_url("images/me.jpg"), "/ForbesFolio/images/me.jpg");
        assert_eq!(config.asset_url("./images/me.jpg"), "/ForbesFolio/images/me.jpg");

        let root = SiteConfig {
            base_path: "/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(root.asset_url("/images/me.jpg"), "/images/me.jpg");
    }

    #[test]
    fn default_timeout_outlasts_longest_flip() {
        let config = MagazineConfig::default();
        assert_eq!(config.settle_timeout_ms(), 800);
        assert!(config.settle_timeout > longest_flip());
        assert_eq!(config.validated(), config);
    }

    #[test]
    fn short_timeout_is_raised() {
        let config = MagazineConfig {
            settle_timeout: Duration::from_millis(200),
        }
        .validated();
        assert_eq!(config.settle_timeout, longest_flip() + Duration::from_millis(100));
    }
}
