//! Seams between the engine and its frontend
//!
//! The engine calls these; it never touches a widget, a file, or an audio
//! device itself. Frontends decide what "display" and "load" mean.

use crate::error::PlayRejected;
use crate::events::LoadTicket;
use std::path::Path;

/// Presentation surface the engine drives
pub trait ReaderSurface {
    /// Updates the page-number and page-total displays
    fn set_page_display(&mut self, page: u32, total: u32);

    /// Updates the progress display, 0.0 to 100.0
    fn set_progress_percent(&mut self, percent: f32);

    /// Shows or hides the loading indicator
    fn set_loading_indicator(&mut self, visible: bool);

    /// Requests the page reveal transition
    ///
    /// Implementations must reset the visible styling before applying it
    /// again on a later frame, so consecutive reveals are never coalesced
    /// into one.
    fn begin_reveal(&mut self);

    /// Shows a transient notice
    fn show_notice(&mut self, message: String);

    /// Updates the play/pause control label
    fn set_play_pause_label(&mut self, label: &'static str);

    /// Updates the mode-toggle control label
    fn set_mode_toggle_label(&mut self, label: &'static str);

    /// Updates the mute-toggle control label
    fn set_mute_label(&mut self, label: &'static str);
}

/// Asynchronous page-image loading
///
/// `begin_load` must eventually come back as an `ImageLoaded` or
/// `ImageFailed` event echoing the ticket — or never, which the engine's
/// timeout covers. `preload` is fire-and-forget cache warming; failures are
/// dropped silently.
pub trait ImageLoader {
    fn begin_load(&mut self, ticket: LoadTicket, path: &Path);

    fn preload(&mut self, path: &Path);
}

/// Narration clip playback
///
/// A `play` rejection (no user gesture yet, missing or undecodable file, no
/// output device) is an expected outcome, not an error; the engine swallows
/// it and stays paused. Clip completion comes back as a `NarrationEnded`
/// event.
pub trait NarrationPlayer {
    /// Points the player at a clip and resets it to the beginning
    fn set_source(&mut self, path: &Path);

    /// Attempts to start playback
    fn play(&mut self) -> Result<(), PlayRejected>;

    /// Pauses playback; a no-op when already paused
    fn pause(&mut self);

    /// Applies the mute flag
    fn set_muted(&mut self, muted: bool);
}
