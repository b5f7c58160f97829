//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Main configuration manager
///
/// The primary interface for loading and saving configuration. Handles file
/// paths, defaults, and validation.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// The default directory follows the XDG base directory specification:
    /// - Linux: `~/.config/picturebook/`
    /// - macOS: `~/Library/Application Support/picturebook/`
    /// - Windows: `%APPDATA%\picturebook\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join("config.toml");
        let persistence = ConfigPersistence::new(config_path);

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    /// Creates a config manager reading a specific config file
    pub fn with_file(config_path: PathBuf) -> ConfigResult<Self> {
        let config_dir = config_path
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Config path has no parent directory".to_string(),
            })?;

        Ok(Self {
            persistence: ConfigPersistence::new(config_path),
            config_dir,
        })
    }

    /// Returns the default config directory based on the platform
    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "picturebook")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    ///
    /// Errors are logged but the function always returns a valid config.
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    ///
    /// Validates before saving and uses atomic writes to prevent corruption.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Updates the configuration using a closure
    ///
    /// Loads the current config, applies the update function, and saves the
    /// result atomically.
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Merges environment variable overrides into the config
    ///
    /// Environment variables follow the pattern `PICTUREBOOK_SECTION_FIELD`,
    /// e.g. `PICTUREBOOK_READER_IMAGE_TIMEOUT_MS=2000`.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;

        if let Ok(timeout) = std::env::var("PICTUREBOOK_READER_IMAGE_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse::<u64>() {
                config.reader.image_timeout_ms = ms;
            }
        }

        if let Ok(threshold) = std::env::var("PICTUREBOOK_READER_SWIPE_THRESHOLD_PX") {
            if let Ok(px) = threshold.parse::<u16>() {
                config.reader.swipe_threshold_px = px;
            }
        }

        if let Err(errors) = config.validate() {
            log::warn!(
                "Config validation warnings after env overrides: {:?}",
                errors
            );
        }

        Ok(config)
    }
}
