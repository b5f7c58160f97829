//! Application-level configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Log level for application logging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Mode the reader starts in when the start screen is skipped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    /// Show the start screen and let the reader pick
    Ask,
    Manual,
    Auto,
}

impl std::fmt::Display for StartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartMode::Ask => write!(f, "ask"),
            StartMode::Manual => write!(f, "manual"),
            StartMode::Auto => write!(f, "auto"),
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Log level for application output
    pub log_level: LogLevel,

    /// How a session begins: start screen, or straight into a mode
    pub start_mode: StartMode,

    /// Run without an audio device; playback attempts behave as rejected
    pub no_narration: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            start_mode: StartMode::Ask,
            no_narration: false,
        }
    }
}

impl ConfigSection for AppConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![])
    }

    fn merge(&mut self, other: Self) {
        self.log_level = other.log_level;
        self.start_mode = other.start_mode;
        self.no_narration = other.no_narration;
    }

    fn section_name(&self) -> &'static str {
        "app"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_starts_at_picker() {
        let config = AppConfig::default();
        assert_eq!(config.start_mode, StartMode::Ask);
        assert!(!config.no_narration);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }

    #[test]
    fn test_start_mode_display() {
        assert_eq!(StartMode::Ask.to_string(), "ask");
        assert_eq!(StartMode::Auto.to_string(), "auto");
    }

    #[test]
    fn test_merge() {
        let mut base = AppConfig::default();
        let mut other = AppConfig::default();
        other.start_mode = StartMode::Auto;
        other.no_narration = true;

        base.merge(other);
        assert_eq!(base.start_mode, StartMode::Auto);
        assert!(base.no_narration);
    }
}
