// crates/tui/src/surface.rs
//! Render model the reader engine writes into
//!
//! `UiModel` is the engine's `ReaderSurface`; the renderer reads it every
//! frame. The reveal runs in two phases so a fresh reveal always renders one
//! blank frame before the page shows, and toasts expire on ticks.

use picturebook_reader::ReaderSurface;
use std::time::{Duration, Instant};

/// How long a transient notice stays up
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Page reveal transition state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing revealed yet (fresh load in progress)
    Hidden,
    /// Styling reset; the next frame may show the page
    Resetting,
    /// Page is shown
    Visible,
}

/// A transient notice with its display deadline
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Option<Instant>,
}

/// Everything the renderer needs to draw the reader view
#[derive(Debug)]
pub struct UiModel {
    pub page: u32,
    pub total_pages: u32,
    pub progress_percent: f32,
    pub loading: bool,
    pub reveal: RevealPhase,
    pub toast: Option<Toast>,
    pub play_pause_label: &'static str,
    pub mode_toggle_label: &'static str,
    pub mute_label: &'static str,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            progress_percent: 0.0,
            loading: false,
            reveal: RevealPhase::Hidden,
            toast: None,
            play_pause_label: "Play",
            mode_toggle_label: "Switch to Auto",
            mute_label: "Mute",
        }
    }

    /// Promotes a resetting reveal to visible; called once per render frame
    pub fn advance_reveal(&mut self) {
        if self.reveal == RevealPhase::Resetting {
            self.reveal = RevealPhase::Visible;
        }
    }

    /// Stamps a freshly shown toast and drops expired ones
    pub fn expire_toast(&mut self, now: Instant) {
        if let Some(toast) = self.toast.as_mut() {
            let shown_at = *toast.shown_at.get_or_insert(now);
            if now.duration_since(shown_at) >= TOAST_TTL {
                self.toast = None;
            }
        }
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderSurface for UiModel {
    fn set_page_display(&mut self, page: u32, total: u32) {
        self.page = page;
        self.total_pages = total;
    }

    fn set_progress_percent(&mut self, percent: f32) {
        self.progress_percent = percent;
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        self.loading = visible;
        if visible {
            // A fresh load hides the previous page until its reveal
            self.reveal = RevealPhase::Hidden;
        }
    }

    fn begin_reveal(&mut self) {
        self.reveal = RevealPhase::Resetting;
    }

    fn show_notice(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            shown_at: None,
        });
    }

    fn set_play_pause_label(&mut self, label: &'static str) {
        self.play_pause_label = label;
    }

    fn set_mode_toggle_label(&mut self, label: &'static str) {
        self.mode_toggle_label = label;
    }

    fn set_mute_label(&mut self, label: &'static str) {
        self.mute_label = label;
    }
}
