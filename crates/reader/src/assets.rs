//! Asset path resolution for the page naming convention
//!
//! Image for page n: `{image_dir}/{file_prefix}{n}.{image_ext}`.
//! Audio for page n: `{audio_dir}/{file_prefix}{n}.{audio_ext}`.
//! Paths are computed, never checked; existence is discovered at load time.

use picturebook_config::BookConfig;
use std::path::{Path, PathBuf};

/// Maps page numbers to asset paths under a book root
#[derive(Debug, Clone)]
pub struct AssetLocator {
    image_dir: PathBuf,
    audio_dir: PathBuf,
    file_prefix: String,
    image_ext: String,
    audio_ext: String,
    cover: Option<PathBuf>,
}

impl AssetLocator {
    pub fn new(book_root: &Path, config: &BookConfig) -> Self {
        Self {
            image_dir: book_root.join(&config.image_dir),
            audio_dir: book_root.join(&config.audio_dir),
            file_prefix: config.file_prefix.clone(),
            image_ext: config.image_ext.clone(),
            audio_ext: config.audio_ext.clone(),
            cover: config.cover.as_ref().map(|c| book_root.join(c)),
        }
    }

    /// Path of the image for page `n`
    pub fn image_path(&self, n: u32) -> PathBuf {
        self.image_dir
            .join(format!("{}{}.{}", self.file_prefix, n, self.image_ext))
    }

    /// Path of the narration clip for page `n`
    pub fn audio_path(&self, n: u32) -> PathBuf {
        self.audio_dir
            .join(format!("{}{}.{}", self.file_prefix, n, self.audio_ext))
    }

    /// Fixed cover image path outside the page convention, if configured
    pub fn cover_path(&self) -> Option<&Path> {
        self.cover.as_deref()
    }
}
