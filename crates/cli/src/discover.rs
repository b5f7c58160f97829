// FILE: crates/cli/src/discover.rs
//! Page-count inference by scanning the book's image directory

use anyhow::{bail, Result};
use picturebook_config::BookConfig;
use std::path::Path;
use walkdir::WalkDir;

/// Infers the page count from files matching the naming convention
///
/// Scans `{book_root}/{image_dir}` for `{file_prefix}{n}.{image_ext}` and
/// returns the highest `n` found. Gaps are tolerated (the reader will show
/// its missing-image notice for absent pages).
pub fn count_pages(book_root: &Path, config: &BookConfig) -> Result<u32> {
    let image_dir = book_root.join(&config.image_dir);
    if !image_dir.is_dir() {
        bail!(
            "Image directory not found: {} (expected pages named {}N.{})",
            image_dir.display(),
            config.file_prefix,
            config.image_ext
        );
    }

    let mut highest: Option<u32> = None;
    let mut matched = 0usize;

    for entry in WalkDir::new(&image_dir).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if let Some(n) = parse_page_number(&name, config) {
            matched += 1;
            highest = Some(highest.map_or(n, |h| h.max(n)));
        }
    }

    match highest {
        Some(n) => {
            log::info!(
                "Discovered {} page image(s) in {}, last page {}",
                matched,
                image_dir.display(),
                n
            );
            if (matched as u64) < u64::from(n) {
                log::warn!("Page numbering has gaps; missing pages will show a notice");
            }
            Ok(n)
        }
        None => bail!(
            "No pages found in {} (expected {}N.{})",
            image_dir.display(),
            config.file_prefix,
            config.image_ext
        ),
    }
}

/// Extracts `n` from `{file_prefix}{n}.{image_ext}`
fn parse_page_number(name: &str, config: &BookConfig) -> Option<u32> {
    let stem = name.strip_suffix(&format!(".{}", config.image_ext))?;
    let digits = stem.strip_prefix(config.file_prefix.as_str())?;
    digits.parse().ok().filter(|n| *n >= 1)
}
