// crates/tui/src/app.rs
//! Main application logic: event loop wiring around the reader engine

use crate::{
    error::TuiResult,
    events::{mouse_in_area, AppEvent, EventHandler},
    loader::{ImageEvent, ThreadImageLoader},
    narration::NarrationAdapter,
    surface::UiModel,
    theme::Theme,
    ui::{self, PanelLayout, RenderContext},
};
use crossbeam_channel::Receiver;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use narration_engine::{ClipEvent, ClipPlayer};
use picturebook_config::{Config, StartMode};
use picturebook_core::ReaderMode;
use picturebook_reader::{AssetLocator, ReaderEngine, ReaderEvent, ReaderKey};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::path::Path;
use std::time::{Duration, Instant};

/// Terminal cells are coarse; gesture math runs in approximate pixels
const CELL_PX: i32 = 10;

/// The main TUI application
pub struct App {
    engine: ReaderEngine<UiModel, ThreadImageLoader, NarrationAdapter>,
    event_handler: EventHandler,
    theme: Theme,
    locator: AssetLocator,
    image_events: Receiver<ImageEvent>,
    clip_events: Receiver<ClipEvent>,
    swipe_threshold_px: i32,
    page_area: Rect,
    drag_start_col: Option<u16>,
    should_quit: bool,
}

impl App {
    /// Creates the application for one book
    pub fn new(config: &Config, book_root: &Path, total_pages: u32) -> TuiResult<Self> {
        let locator = AssetLocator::new(book_root, &config.book);

        let loader = ThreadImageLoader::new()?;
        let image_events = loader.events();

        let narration = if config.app.no_narration {
            NarrationAdapter::disabled()
        } else {
            match ClipPlayer::new() {
                Ok(player) => NarrationAdapter::new(player),
                Err(e) => {
                    log::warn!("Narration unavailable: {}", e);
                    NarrationAdapter::disabled()
                }
            }
        };
        let clip_events = narration.events();

        let engine = ReaderEngine::new(
            locator.clone(),
            total_pages,
            &config.reader,
            UiModel::new(),
            loader,
            narration,
        )?;

        let mut app = Self {
            engine,
            event_handler: EventHandler::new(Duration::from_millis(config.reader.ui_refresh_ms)),
            theme: Theme::default(),
            locator,
            image_events,
            clip_events,
            swipe_threshold_px: i32::from(config.reader.swipe_threshold_px),
            page_area: Rect::default(),
            drag_start_col: None,
            should_quit: false,
        };

        // Configured start mode skips the picker
        match config.app.start_mode {
            StartMode::Ask => {}
            StartMode::Manual => app.start(ReaderMode::Manual),
            StartMode::Auto => app.start(ReaderMode::Auto),
        }

        Ok(app)
    }

    /// Runs the application event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        while !self.should_quit {
            self.pump_asset_events();

            let now = Instant::now();
            self.engine.surface_mut().expire_toast(now);

            let ctx = RenderContext {
                model: self.engine.surface(),
                started: self.engine.is_started(),
                playing: self.engine.narration_status().is_playing(),
                page_image: self.current_image_name(),
                theme: &self.theme,
            };
            let mut layout = PanelLayout::default();
            terminal.draw(|frame| {
                layout = ui::render(frame, &ctx);
            })?;
            self.page_area = layout.page_area;

            // The resetting frame has been drawn; the next one may reveal
            self.engine.surface_mut().advance_reveal();

            match self.event_handler.next()? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Quit => self.should_quit = true,
                AppEvent::Tick => self.engine.handle_event(ReaderEvent::Tick, Instant::now()),
                AppEvent::Resize(_, _) => {
                    // Terminal handles resize; next draw uses the new size
                }
            }
        }

        Ok(())
    }

    /// Forwards completed asset work into the engine
    fn pump_asset_events(&mut self) {
        let now = Instant::now();

        while let Ok(event) = self.image_events.try_recv() {
            let event = match event {
                ImageEvent::Loaded { ticket } => ReaderEvent::ImageLoaded { ticket },
                ImageEvent::Failed { ticket } => ReaderEvent::ImageFailed { ticket },
            };
            self.engine.handle_event(event, now);
        }

        while let Ok(ClipEvent::Ended) = self.clip_events.try_recv() {
            self.engine.handle_event(ReaderEvent::NarrationEnded, now);
        }
    }

    /// Handles key events
    fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();

        if !self.engine.is_started() {
            match key.code {
                KeyCode::Char('1') => self.start(ReaderMode::Auto),
                KeyCode::Char('2') | KeyCode::Enter => self.start(ReaderMode::Manual),
                _ => {}
            }
            return;
        }

        let event = match key.code {
            KeyCode::Right => ReaderEvent::Key(ReaderKey::Right),
            KeyCode::Left => ReaderEvent::Key(ReaderKey::Left),
            KeyCode::Char(' ') => ReaderEvent::PlayPausePressed,
            KeyCode::Char('m') => ReaderEvent::Key(ReaderKey::Mute),
            KeyCode::Char('a') => ReaderEvent::ModeTogglePressed,
            KeyCode::Char('r') => ReaderEvent::RestartPressed,
            _ => return,
        };
        self.engine.handle_event(event, now);
    }

    /// Handles mouse events: press-drag-release is a swipe, a short release
    /// inside the page panel is a tap
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse_in_area(mouse.column, mouse.row, self.page_area) {
                    self.drag_start_col = Some(mouse.column);
                    self.engine.handle_event(
                        ReaderEvent::TouchStarted {
                            x: i32::from(mouse.column) * CELL_PX,
                        },
                        now,
                    );
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(start) = self.drag_start_col.take() {
                    self.engine.handle_event(
                        ReaderEvent::TouchEnded {
                            x: i32::from(mouse.column) * CELL_PX,
                        },
                        now,
                    );

                    let displacement =
                        (i32::from(mouse.column) - i32::from(start)).abs() * CELL_PX;
                    if displacement < self.swipe_threshold_px
                        && mouse_in_area(mouse.column, mouse.row, self.page_area)
                    {
                        self.engine.handle_event(ReaderEvent::PageTapped, now);
                    }
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, mode: ReaderMode) {
        self.engine
            .handle_event(ReaderEvent::StartRequested(mode), Instant::now());
    }

    fn current_image_name(&self) -> String {
        self.locator
            .image_path(self.engine.current_page())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn engine(&self) -> &ReaderEngine<UiModel, ThreadImageLoader, NarrationAdapter> {
        &self.engine
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEventKind};
    use picturebook_config::Config;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.app.no_narration = true;
        config
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_app(total_pages: u32) -> App {
        let dir = std::env::temp_dir();
        App::new(&test_config(), &dir, total_pages).expect("app")
    }

    #[test]
    fn test_app_starts_at_picker() {
        let app = test_app(13);
        assert!(!app.engine().is_started());
    }

    #[test]
    fn test_configured_auto_start_skips_picker() {
        let mut config = test_config();
        config.app.start_mode = StartMode::Auto;
        let app = App::new(&config, &std::env::temp_dir(), 13).expect("app");
        assert!(app.engine().is_started());
        assert_eq!(app.engine().state().mode, ReaderMode::Auto);
    }

    #[test]
    fn test_picker_keys_choose_mode() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('1')));
        assert!(app.engine().is_started());
        assert_eq!(app.engine().state().mode, ReaderMode::Auto);

        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.engine().state().mode, ReaderMode::Manual);
    }

    #[test]
    fn test_arrow_keys_turn_pages() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.engine().current_page(), 2);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.engine().current_page(), 1);
    }

    #[test]
    fn test_mute_key_round_trip() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.engine().state().muted);
        app.handle_key(key(KeyCode::Char('m')));
        assert!(!app.engine().state().muted);
    }

    #[test]
    fn test_mode_toggle_key() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.engine().state().mode, ReaderMode::Auto);
    }

    #[test]
    fn test_drag_release_maps_to_swipe() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));
        app.page_area = Rect::new(0, 0, 80, 20);

        // 8 cells ~ 80px: over the 50px default threshold, leftward
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 32, 5));
        assert_eq!(app.engine().current_page(), 2);

        // Rightward drag goes back
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 32, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 5));
        assert_eq!(app.engine().current_page(), 1);
    }

    #[test]
    fn test_short_release_in_panel_is_a_tap() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));
        app.page_area = Rect::new(0, 0, 80, 20);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 41, 5));
        assert_eq!(app.engine().current_page(), 2);
    }

    #[test]
    fn test_click_outside_panel_does_nothing() {
        let mut app = test_app(13);
        app.handle_key(key(KeyCode::Char('2')));
        app.page_area = Rect::new(0, 0, 80, 10);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 15));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 15));
        assert_eq!(app.engine().current_page(), 1);
    }
}
