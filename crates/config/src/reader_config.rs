//! Reader behavior configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Reader behavior: load timeout, gestures, preload, refresh
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReaderConfig {
    /// Image load timeout in milliseconds; 0 disables the timeout fallback
    pub image_timeout_ms: u64,

    /// Minimum horizontal displacement to count a drag as a swipe
    pub swipe_threshold_px: u16,

    /// Pages warmed at session start (cover is always included if set)
    pub preload_pages: u32,

    /// UI refresh rate in milliseconds
    pub ui_refresh_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            image_timeout_ms: 4000,
            swipe_threshold_px: 50,
            preload_pages: 5,
            ui_refresh_ms: 250,
        }
    }
}

impl ConfigSection for ReaderConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::in_range(self.image_timeout_ms, 0, 60_000, "reader.image_timeout_ms"),
            Validator::in_range(self.swipe_threshold_px, 1, 500, "reader.swipe_threshold_px"),
            Validator::in_range(self.preload_pages, 0, 50, "reader.preload_pages"),
            Validator::in_range(self.ui_refresh_ms, 16, 1000, "reader.ui_refresh_ms"),
        ])
    }

    fn merge(&mut self, other: Self) {
        self.image_timeout_ms = other.image_timeout_ms;
        self.swipe_threshold_px = other.swipe_threshold_px;
        self.preload_pages = other.preload_pages;
        self.ui_refresh_ms = other.ui_refresh_ms;
    }

    fn section_name(&self) -> &'static str {
        "reader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ReaderConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_reader_behavior() {
        let config = ReaderConfig::default();
        assert_eq!(config.image_timeout_ms, 4000);
        assert_eq!(config.swipe_threshold_px, 50);
        assert_eq!(config.preload_pages, 5);
    }

    #[test]
    fn test_zero_timeout_is_valid() {
        let mut config = ReaderConfig::default();
        config.image_timeout_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_swipe_threshold_invalid() {
        let mut config = ReaderConfig::default();
        config.swipe_threshold_px = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_timeout_invalid() {
        let mut config = ReaderConfig::default();
        config.image_timeout_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = ReaderConfig::default();
        let mut other = ReaderConfig::default();
        other.image_timeout_ms = 0;
        other.swipe_threshold_px = 80;

        base.merge(other);
        assert_eq!(base.image_timeout_ms, 0);
        assert_eq!(base.swipe_threshold_px, 80);
    }
}
