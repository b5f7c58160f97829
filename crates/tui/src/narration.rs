// crates/tui/src/narration.rs
//! Bridges the narration engine into the reader's player seam

use crossbeam_channel::{never, Receiver};
use narration_engine::{ClipEvent, ClipPlayer};
use picturebook_reader::{NarrationPlayer, PlayRejected};
use std::path::Path;

/// Narration player seam backed by `ClipPlayer`, or by nothing at all
///
/// Running without audio (`--no-narration`, or no usable worker) makes every
/// play attempt a rejection, which the engine already swallows; the book
/// stays fully readable.
pub struct NarrationAdapter {
    player: Option<ClipPlayer>,
    events: Receiver<ClipEvent>,
}

impl NarrationAdapter {
    /// Creates an adapter with live audio
    pub fn new(player: ClipPlayer) -> Self {
        let events = player.events();
        Self {
            player: Some(player),
            events,
        }
    }

    /// Creates an adapter that rejects all playback
    pub fn disabled() -> Self {
        Self {
            player: None,
            events: never(),
        }
    }

    /// Channel on which clip endings arrive (never fires when disabled)
    pub fn events(&self) -> Receiver<ClipEvent> {
        self.events.clone()
    }
}

impl NarrationPlayer for NarrationAdapter {
    fn set_source(&mut self, path: &Path) {
        if let Some(player) = self.player.as_mut() {
            player.set_source(path);
        }
    }

    fn play(&mut self) -> Result<(), PlayRejected> {
        match self.player.as_mut() {
            Some(player) => player
                .play()
                .map_err(|e| PlayRejected::new(e.to_string())),
            None => Err(PlayRejected::new("narration disabled")),
        }
    }

    fn pause(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.pause();
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(player) = self.player.as_mut() {
            player.set_muted(muted);
        }
    }
}
