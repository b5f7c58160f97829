//! The reader engine: one session's state machine
//!
//! Every transition is driven by `handle_event`, which takes the caller's
//! clock so the image-load timeout can be tested without sleeping.

use crate::assets::AssetLocator;
use crate::error::{ReaderError, ReaderResult};
use crate::events::{LoadTicket, ReaderEvent, ReaderKey};
use crate::gesture::{SwipeDirection, SwipeTracker};
use crate::surface::{ImageLoader, NarrationPlayer, ReaderSurface};
use picturebook_config::ReaderConfig;
use picturebook_core::{
    mode_toggle_label, mute_label, page_progress_percent, play_pause_label, AppError,
    NarrationStatus, ReaderMode, ReaderState,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Tracking for the in-flight image load
///
/// Dropped when the first terminal event (loaded, failed, timeout) is
/// honored; events arriving afterwards find no pending load and are ignored.
#[derive(Debug)]
struct PendingLoad {
    ticket: LoadTicket,
    page: u32,
    path: PathBuf,
    deadline: Option<Instant>,
}

/// The page-navigation and playback state machine
pub struct ReaderEngine<S, L, N> {
    state: ReaderState,
    narration: NarrationStatus,
    started: bool,
    total_pages: u32,
    locator: AssetLocator,
    image_timeout: Option<Duration>,
    preload_pages: u32,
    swipe: SwipeTracker,
    pending: Option<PendingLoad>,
    next_ticket: u64,
    surface: S,
    loader: L,
    player: N,
}

impl<S, L, N> ReaderEngine<S, L, N>
where
    S: ReaderSurface,
    L: ImageLoader,
    N: NarrationPlayer,
{
    /// Creates an engine for one book and warms the cache for its opening
    /// pages (and cover, when configured)
    pub fn new(
        locator: AssetLocator,
        total_pages: u32,
        options: &ReaderConfig,
        surface: S,
        loader: L,
        player: N,
    ) -> ReaderResult<Self> {
        if total_pages == 0 {
            return Err(ReaderError::NoPages);
        }

        let image_timeout = match options.image_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        let mut engine = Self {
            state: ReaderState::new(),
            narration: NarrationStatus::Paused,
            started: false,
            total_pages,
            locator,
            image_timeout,
            preload_pages: options.preload_pages,
            swipe: SwipeTracker::new(options.swipe_threshold_px),
            pending: None,
            next_ticket: 0,
            surface,
            loader,
            player,
        };

        engine.surface.set_page_display(1, total_pages);
        engine.warm_opening_pages();
        Ok(engine)
    }

    /// Feeds one event through the state machine
    pub fn handle_event(&mut self, event: ReaderEvent, now: Instant) {
        match event {
            ReaderEvent::StartRequested(mode) => self.start_reader(mode, now),

            ReaderEvent::NextPressed | ReaderEvent::PageTapped => {
                if self.started {
                    self.next_page(self.state.is_auto(), now);
                }
            }
            ReaderEvent::PrevPressed => {
                if self.started {
                    self.prev_page(self.state.is_auto(), now);
                }
            }
            ReaderEvent::RestartPressed => {
                if self.started {
                    self.load_page(1, self.state.is_auto(), now);
                }
            }
            ReaderEvent::ModeTogglePressed => {
                if self.started {
                    self.toggle_mode();
                }
            }
            ReaderEvent::PlayPausePressed => {
                if self.started {
                    self.toggle_play_pause();
                }
            }
            ReaderEvent::MuteTogglePressed => {
                if self.started {
                    self.toggle_mute();
                }
            }
            ReaderEvent::Key(key) => {
                if self.started {
                    self.handle_key(key, now);
                }
            }
            ReaderEvent::TouchStarted { x } => {
                if self.started {
                    self.swipe.touch_start(x);
                }
            }
            ReaderEvent::TouchEnded { x } => {
                if self.started {
                    match self.swipe.touch_end(x) {
                        Some(SwipeDirection::Right) => self.prev_page(self.state.is_auto(), now),
                        Some(SwipeDirection::Left) => self.next_page(self.state.is_auto(), now),
                        None => {}
                    }
                }
            }

            ReaderEvent::ImageLoaded { ticket } => self.on_image_loaded(ticket),
            ReaderEvent::ImageFailed { ticket } => self.on_image_failed(ticket),
            ReaderEvent::NarrationEnded => self.on_narration_ended(now),
            ReaderEvent::Tick => self.on_tick(now),
        }
    }

    /// Leaves the start screen in the chosen mode
    ///
    /// The only point where autoplay is attempted as the direct result of a
    /// user gesture.
    fn start_reader(&mut self, mode: ReaderMode, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.set_mode(mode);
        self.load_page(1, mode == ReaderMode::Auto, now);
    }

    /// Central transition: shows page `n` and lines its narration up
    fn load_page(&mut self, n: u32, should_play: bool, now: Instant) {
        let n = n.clamp(1, self.total_pages);
        self.state.current_page = n;

        self.surface.set_page_display(n, self.total_pages);
        self.surface
            .set_progress_percent(page_progress_percent(n, self.total_pages));

        self.surface.set_loading_indicator(true);
        let ticket = self.fresh_ticket();
        let image = self.locator.image_path(n);
        self.pending = Some(PendingLoad {
            ticket,
            page: n,
            path: image.clone(),
            deadline: self.image_timeout.map(|t| now + t),
        });
        self.loader.begin_load(ticket, &image);

        self.player.set_source(&self.locator.audio_path(n));
        self.player.set_muted(self.state.muted);

        if n < self.total_pages {
            self.loader.preload(&self.locator.image_path(n + 1));
        }

        if should_play {
            self.try_play();
        }
        log::debug!("Loaded page {}/{}", n, self.total_pages);
    }

    fn next_page(&mut self, should_play: bool, now: Instant) {
        if self.state.current_page < self.total_pages {
            self.load_page(self.state.current_page + 1, should_play, now);
        } else if self.state.is_auto() {
            // End of book: nothing further to play
            self.surface
                .set_play_pause_label(play_pause_label(NarrationStatus::Paused));
        }
    }

    fn prev_page(&mut self, should_play: bool, now: Instant) {
        if self.state.current_page > 1 {
            self.load_page(self.state.current_page - 1, should_play, now);
        }
    }

    fn handle_key(&mut self, key: ReaderKey, now: Instant) {
        match key {
            ReaderKey::Right => self.next_page(self.state.is_auto(), now),
            ReaderKey::Left => self.prev_page(self.state.is_auto(), now),
            ReaderKey::Mute => self.toggle_mute(),
        }
    }

    /// Applies a mode and the labels that go with it
    fn set_mode(&mut self, mode: ReaderMode) {
        self.state.mode = mode;
        self.surface.set_mode_toggle_label(mode_toggle_label(mode));
        let label = match mode {
            ReaderMode::Auto => play_pause_label(NarrationStatus::Playing),
            ReaderMode::Manual => play_pause_label(NarrationStatus::Paused),
        };
        self.surface.set_play_pause_label(label);
    }

    fn toggle_mode(&mut self) {
        let next = match self.state.mode {
            ReaderMode::Manual => ReaderMode::Auto,
            ReaderMode::Auto => ReaderMode::Manual,
        };
        self.set_mode(next);
        match next {
            ReaderMode::Auto => self.try_play(),
            ReaderMode::Manual => {
                self.player.pause();
                self.narration = NarrationStatus::Paused;
            }
        }
    }

    fn toggle_play_pause(&mut self) {
        match self.narration {
            NarrationStatus::Paused => match self.player.play() {
                Ok(()) => {
                    self.narration = NarrationStatus::Playing;
                    self.surface
                        .set_play_pause_label(play_pause_label(self.narration));
                }
                Err(rejected) => {
                    // Label stays on "Play"
                    log::debug!("Play attempt rejected: {}", rejected);
                }
            },
            NarrationStatus::Playing => {
                self.player.pause();
                self.narration = NarrationStatus::Paused;
                self.surface
                    .set_play_pause_label(play_pause_label(self.narration));
            }
        }
    }

    fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        self.player.set_muted(self.state.muted);
        self.surface.set_mute_label(mute_label(self.state.muted));
    }

    /// Best-effort play; rejections leave the engine paused
    fn try_play(&mut self) {
        match self.player.play() {
            Ok(()) => self.narration = NarrationStatus::Playing,
            Err(rejected) => {
                log::debug!("Narration autoplay rejected: {}", rejected);
                self.narration = NarrationStatus::Paused;
            }
        }
    }

    fn on_narration_ended(&mut self, now: Instant) {
        self.narration = NarrationStatus::Paused;
        if self.state.is_auto() {
            self.next_page(true, now);
        }
    }

    fn on_image_loaded(&mut self, ticket: LoadTicket) {
        if self.settle_pending(ticket).is_some() {
            self.surface.set_loading_indicator(false);
            self.surface.begin_reveal();
        } else {
            log::trace!("Ignoring stale image-loaded event {:?}", ticket);
        }
    }

    fn on_image_failed(&mut self, ticket: LoadTicket) {
        if let Some(pending) = self.settle_pending(ticket) {
            self.surface.set_loading_indicator(false);
            let err = AppError::ImageLoadFailed {
                page: pending.page,
                path: pending.path,
            };
            log::warn!("{}", err);
            self.surface.show_notice(err.user_message());
        } else {
            log::trace!("Ignoring stale image-failed event {:?}", ticket);
        }
    }

    /// Fires the timeout fallback once the in-flight load's deadline passes
    fn on_tick(&mut self, now: Instant) {
        let expired = self
            .pending
            .as_ref()
            .and_then(|p| p.deadline)
            .is_some_and(|deadline| now >= deadline);
        if !expired {
            return;
        }

        if let Some(pending) = self.pending.take() {
            self.surface.set_loading_indicator(false);
            let err = AppError::ImageLoadTimeout {
                page: pending.page,
                path: pending.path,
            };
            log::warn!("{}", err);
            self.surface.show_notice(err.user_message());
            // Optimistic reveal of whatever has decoded so far
            self.surface.begin_reveal();
        }
    }

    /// Takes the pending load iff `ticket` identifies it
    fn settle_pending(&mut self, ticket: LoadTicket) -> Option<PendingLoad> {
        if self.pending.as_ref().map(|p| p.ticket) == Some(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    fn fresh_ticket(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        LoadTicket(self.next_ticket)
    }

    /// Best-effort warm-up of the cover and the first few pages
    fn warm_opening_pages(&mut self) {
        if let Some(cover) = self.locator.cover_path() {
            let cover = cover.to_path_buf();
            self.loader.preload(&cover);
        }
        let upto = self.preload_pages.min(self.total_pages);
        for n in 1..=upto {
            let path = self.locator.image_path(n);
            self.loader.preload(&path);
        }
    }

    // Accessors for frontends and tests

    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn narration_status(&self) -> NarrationStatus {
        self.narration
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn has_pending_load(&self) -> bool {
        self.pending.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
