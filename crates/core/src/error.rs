//! Error types for the picturebook reader
//!
//! Two severity tiers matter here:
//! - **Degraded**: one asset is missing or slow; the book stays navigable
//! - **Fatal**: the session cannot start (bad configuration, no book found)
//!
//! Asset problems carry enough context (page, expected path) to build the
//! transient notice shown to the reader.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, AppError>;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// One feature or asset degraded; the session continues
    Degraded,
    /// The session cannot start or continue
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for the picturebook reader
#[derive(Error, Debug)]
pub enum AppError {
    /// The image for a page reported a load failure
    #[error("Image for page {page} failed to load (expected at {path})")]
    ImageLoadFailed { page: u32, path: PathBuf },

    /// The image for a page produced no load or error event in time
    #[error("Image for page {page} is slow or missing ({path})")]
    ImageLoadTimeout { page: u32, path: PathBuf },

    /// Narration could not be decoded or routed to an output device
    #[error("Narration unavailable: {reason}")]
    NarrationUnavailable { reason: String },

    /// A configured value is out of range or malformed
    #[error("Invalid configuration: {setting} = '{value}' ({reason})")]
    InvalidConfiguration {
        setting: String,
        value: String,
        reason: String,
    },

    /// The book directory holds no pages matching the naming convention
    #[error("No pages found in {dir} (expected {pattern})")]
    EmptyBook { dir: PathBuf, pattern: String },

    /// General I/O error
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ImageLoadFailed { .. }
            | Self::ImageLoadTimeout { .. }
            | Self::NarrationUnavailable { .. } => ErrorSeverity::Degraded,

            Self::InvalidConfiguration { .. }
            | Self::EmptyBook { .. }
            | Self::Io { .. }
            | Self::Internal { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns the message suitable for the transient notice shown in the UI
    pub fn user_message(&self) -> String {
        match self {
            Self::ImageLoadFailed { page, path } => {
                format!("Couldn't load page {} ({})", page, path.display())
            }
            Self::ImageLoadTimeout { page, path } => {
                format!("Page {} is slow or missing ({})", page, path.display())
            }
            Self::NarrationUnavailable { .. } => "Narration is unavailable.".to_string(),
            Self::InvalidConfiguration { setting, .. } => {
                format!("Invalid setting: {}. Please check your configuration.", setting)
            }
            Self::EmptyBook { dir, .. } => {
                format!("No pages found in {}.", dir.display())
            }
            Self::Io { .. } => "A file operation failed. Please try again.".to_string(),
            Self::Internal { .. } => "An unexpected error occurred.".to_string(),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(source: io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source,
        }
    }
}
