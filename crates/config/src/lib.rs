//! Picturebook configuration system
//!
//! Each concern defines its config as a type implementing the
//! `ConfigSection` trait; the root `Config` aggregates the sections.
//!
//! - **Graceful degradation**: a missing config file means defaults
//! - **Atomic writes**: the config file is never left half-written
//! - **Zero panics**: all errors are handled via Result types
//!
//! # Example
//!
//! ```rust
//! use picturebook_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config: Config = manager.load_or_default();
//! println!("Image dir: {}", config.book.image_dir);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
mod app_config;
mod book_config;
mod reader_config;

pub use app_config::{AppConfig, LogLevel, StartMode};
pub use book_config::BookConfig;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use reader_config::ReaderConfig;
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
///
/// Contains all config sections; new sections added here are automatically
/// included in load/save operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Book layout and naming convention
    pub book: BookConfig,

    /// Reader behavior (timeout, gestures, preload)
    pub reader: ReaderConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.book.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.reader.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    ///
    /// Used for override chains: defaults < file < CLI args
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.book.merge(other.book);
        self.reader.merge(other.reader);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            book: BookConfig::default(),
            reader: ReaderConfig::default(),
        }
    }
}
