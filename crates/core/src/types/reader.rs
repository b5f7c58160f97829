//! Reader session state and the label model for its controls

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderMode {
    /// User advances pages explicitly; narration never auto-advances
    Manual,
    /// Narration completion advances to the next page
    Auto,
}

impl Default for ReaderMode {
    fn default() -> Self {
        Self::Manual
    }
}

impl fmt::Display for ReaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Narration playback status as the reader engine tracks it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationStatus {
    Playing,
    Paused,
}

impl NarrationStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// One reader session's mutable state
///
/// Owned by a single engine instance; created at session start and never
/// persisted. `current_page` stays within `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderState {
    /// Currently displayed page, 1-based
    pub current_page: u32,
    /// Reading mode
    pub mode: ReaderMode,
    /// Narration mute flag
    pub muted: bool,
}

impl ReaderState {
    /// Creates the state a fresh session starts with
    pub fn new() -> Self {
        Self {
            current_page: 1,
            mode: ReaderMode::Manual,
            muted: false,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.mode == ReaderMode::Auto
    }
}

impl Default for ReaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress through the book as a percentage in `[0, 100]`
///
/// Page 1 maps to 0 and the final page to 100. A single-page book reports
/// 100 (its only page is the last page).
pub fn page_progress_percent(page: u32, total_pages: u32) -> f32 {
    if total_pages <= 1 {
        return 100.0;
    }
    let page = page.clamp(1, total_pages);
    ((page - 1) as f32 / (total_pages - 1) as f32 * 100.0).clamp(0.0, 100.0)
}

/// Play/pause control label for the given playback status
pub fn play_pause_label(status: NarrationStatus) -> &'static str {
    match status {
        NarrationStatus::Playing => "Pause",
        NarrationStatus::Paused => "Play",
    }
}

/// Mode-toggle control label: names the mode the toggle switches *to*
pub fn mode_toggle_label(mode: ReaderMode) -> &'static str {
    match mode {
        ReaderMode::Auto => "Switch to Manual",
        ReaderMode::Manual => "Switch to Auto",
    }
}

/// Mute-toggle control label
pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "Unmute"
    } else {
        "Mute"
    }
}
