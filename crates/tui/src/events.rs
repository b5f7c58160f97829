// crates/tui/src/events.rs
//! Terminal event handling

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Tick event for updates
    Tick,
    /// Quit application
    Quit,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Polls for the next event; no input within the tick rate yields a tick
    pub fn next(&self) -> crate::error::TuiResult<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Tick);
        }

        let event = match event::read()? {
            CrosstermEvent::Key(key) if is_quit_key(&key) => AppEvent::Quit,
            CrosstermEvent::Key(key) => AppEvent::Key(key),
            CrosstermEvent::Mouse(mouse) => AppEvent::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => AppEvent::Resize(w, h),
            _ => AppEvent::Tick,
        };
        Ok(event)
    }
}

/// `q` or Ctrl-C ends the session from any view
fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Helper to check if mouse is in area
pub fn mouse_in_area(mouse_x: u16, mouse_y: u16, area: ratatui::layout::Rect) -> bool {
    mouse_x >= area.x
        && mouse_x < area.x + area.width
        && mouse_y >= area.y
        && mouse_y < area.y + area.height
}
