//! Book layout and asset naming configuration

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a book's assets live and how they are named
///
/// Image for page n: `{image_dir}/{file_prefix}{n}.{image_ext}`.
/// Audio for page n: `{audio_dir}/{file_prefix}{n}.{audio_ext}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookConfig {
    /// Number of pages; absent means infer by scanning the image directory
    pub total_pages: Option<u32>,

    /// Directory holding page images, relative to the book root
    pub image_dir: String,

    /// Directory holding narration clips, relative to the book root
    pub audio_dir: String,

    /// Shared filename prefix for images and audio
    pub file_prefix: String,

    /// Page image extension (no dot)
    pub image_ext: String,

    /// Narration clip extension (no dot)
    pub audio_ext: String,

    /// Optional cover image at a fixed path outside the page convention
    pub cover: Option<PathBuf>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            total_pages: None,
            image_dir: "images".to_string(),
            audio_dir: "audio".to_string(),
            file_prefix: "Page-".to_string(),
            image_ext: "png".to_string(),
            audio_ext: "mp3".to_string(),
            cover: None,
        }
    }
}

impl ConfigSection for BookConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = vec![
            Validator::not_empty(&self.image_dir, "book.image_dir"),
            Validator::not_empty(&self.audio_dir, "book.audio_dir"),
            Validator::not_empty(&self.file_prefix, "book.file_prefix"),
            Validator::extension(&self.image_ext, "book.image_ext"),
            Validator::extension(&self.audio_ext, "book.audio_ext"),
        ];

        if let Some(pages) = self.total_pages {
            checks.push(Validator::in_range(pages, 1, 10_000, "book.total_pages"));
        }

        Validator::collect_errors(checks)
    }

    fn merge(&mut self, other: Self) {
        self.total_pages = other.total_pages.or(self.total_pages);
        self.image_dir = other.image_dir;
        self.audio_dir = other.audio_dir;
        self.file_prefix = other.file_prefix;
        self.image_ext = other.image_ext;
        self.audio_ext = other.audio_ext;
        self.cover = other.cover.or(self.cover.take());
    }

    fn section_name(&self) -> &'static str {
        "book"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BookConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_naming_convention() {
        let config = BookConfig::default();
        assert_eq!(config.image_dir, "images");
        assert_eq!(config.audio_dir, "audio");
        assert_eq!(config.file_prefix, "Page-");
        assert_eq!(config.image_ext, "png");
        assert_eq!(config.audio_ext, "mp3");
        assert!(config.total_pages.is_none());
    }

    #[test]
    fn test_zero_pages_invalid() {
        let mut config = BookConfig::default();
        config.total_pages = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dotted_extension_invalid() {
        let mut config = BookConfig::default();
        config.image_ext = ".png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_prefix_invalid() {
        let mut config = BookConfig::default();
        config.file_prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_keeps_known_page_count() {
        let mut base = BookConfig::default();
        base.total_pages = Some(13);

        let other = BookConfig::default();
        base.merge(other);
        assert_eq!(base.total_pages, Some(13));
    }

    #[test]
    fn test_merge_prefers_other_page_count() {
        let mut base = BookConfig::default();
        base.total_pages = Some(13);

        let mut other = BookConfig::default();
        other.total_pages = Some(20);
        base.merge(other);
        assert_eq!(base.total_pages, Some(20));
    }

    #[test]
    fn test_multiple_validation_errors() {
        let config = BookConfig {
            total_pages: Some(0),
            image_ext: ".png".to_string(),
            file_prefix: String::new(),
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().len(), 3);
    }
}
