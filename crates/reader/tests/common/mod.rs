//! Shared recording doubles for engine tests

use picturebook_reader::{ImageLoader, LoadTicket, NarrationPlayer, PlayRejected, ReaderSurface};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Everything the engine asked the surface to show
#[derive(Default)]
pub struct SurfaceLog {
    pub page_display: Vec<(u32, u32)>,
    pub progress: Vec<f32>,
    pub indicator: Vec<bool>,
    pub reveals: u32,
    pub notices: Vec<String>,
    pub play_pause_labels: Vec<&'static str>,
    pub mode_toggle_labels: Vec<&'static str>,
    pub mute_labels: Vec<&'static str>,
}

impl SurfaceLog {
    pub fn last_play_pause_label(&self) -> Option<&'static str> {
        self.play_pause_labels.last().copied()
    }

    pub fn last_mode_toggle_label(&self) -> Option<&'static str> {
        self.mode_toggle_labels.last().copied()
    }

    pub fn last_mute_label(&self) -> Option<&'static str> {
        self.mute_labels.last().copied()
    }

    pub fn last_progress(&self) -> Option<f32> {
        self.progress.last().copied()
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator.last().copied().unwrap_or(false)
    }
}

#[derive(Clone, Default)]
pub struct RecordingSurface(pub Rc<RefCell<SurfaceLog>>);

impl ReaderSurface for RecordingSurface {
    fn set_page_display(&mut self, page: u32, total: u32) {
        self.0.borrow_mut().page_display.push((page, total));
    }

    fn set_progress_percent(&mut self, percent: f32) {
        self.0.borrow_mut().progress.push(percent);
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        self.0.borrow_mut().indicator.push(visible);
    }

    fn begin_reveal(&mut self) {
        self.0.borrow_mut().reveals += 1;
    }

    fn show_notice(&mut self, message: String) {
        self.0.borrow_mut().notices.push(message);
    }

    fn set_play_pause_label(&mut self, label: &'static str) {
        self.0.borrow_mut().play_pause_labels.push(label);
    }

    fn set_mode_toggle_label(&mut self, label: &'static str) {
        self.0.borrow_mut().mode_toggle_labels.push(label);
    }

    fn set_mute_label(&mut self, label: &'static str) {
        self.0.borrow_mut().mute_labels.push(label);
    }
}

/// Every load and preload the engine requested
#[derive(Default)]
pub struct LoaderLog {
    pub begun: Vec<(LoadTicket, PathBuf)>,
    pub preloaded: Vec<PathBuf>,
}

impl LoaderLog {
    /// Ticket of the most recent load invocation
    pub fn last_ticket(&self) -> LoadTicket {
        self.begun.last().expect("no load was begun").0
    }
}

#[derive(Clone, Default)]
pub struct RecordingLoader(pub Rc<RefCell<LoaderLog>>);

impl ImageLoader for RecordingLoader {
    fn begin_load(&mut self, ticket: LoadTicket, path: &Path) {
        self.0.borrow_mut().begun.push((ticket, path.to_path_buf()));
    }

    fn preload(&mut self, path: &Path) {
        self.0.borrow_mut().preloaded.push(path.to_path_buf());
    }
}

/// Scripted narration player
pub struct PlayerLog {
    pub sources: Vec<PathBuf>,
    pub play_attempts: u32,
    pub pauses: u32,
    pub mute_calls: Vec<bool>,
    /// When false, every play attempt is rejected (autoplay policy stand-in)
    pub accept_plays: bool,
}

impl Default for PlayerLog {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            play_attempts: 0,
            pauses: 0,
            mute_calls: Vec::new(),
            accept_plays: true,
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingPlayer(pub Rc<RefCell<PlayerLog>>);

impl NarrationPlayer for RecordingPlayer {
    fn set_source(&mut self, path: &Path) {
        self.0.borrow_mut().sources.push(path.to_path_buf());
    }

    fn play(&mut self) -> Result<(), PlayRejected> {
        let mut log = self.0.borrow_mut();
        log.play_attempts += 1;
        if log.accept_plays {
            Ok(())
        } else {
            Err(PlayRejected::new("scripted rejection"))
        }
    }

    fn pause(&mut self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn set_muted(&mut self, muted: bool) {
        self.0.borrow_mut().mute_calls.push(muted);
    }
}
