// crates/tui/src/lib.rs
//! Terminal frontend for the picturebook reader

mod app;
mod error;
mod events;
mod loader;
mod narration;
mod surface;
mod theme;
pub mod ui;

pub use app::App;
pub use error::{TuiError, TuiResult};
pub use events::{AppEvent, EventHandler};
pub use loader::{ImageEvent, ThreadImageLoader};
pub use narration::NarrationAdapter;
pub use surface::{RevealPhase, Toast, UiModel};
pub use theme::{Theme, ThemeType};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use picturebook_config::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

/// Main TUI application wrapper: owns terminal setup and teardown
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiApp {
    /// Creates and initializes a new TUI application
    pub fn new(config: &Config, book_root: &Path, total_pages: u32) -> TuiResult<Self> {
        let app = App::new(config, book_root, total_pages)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    /// Runs the TUI application
    pub fn run(&mut self) -> TuiResult<()> {
        let result = self.app.run(&mut self.terminal);
        self.cleanup()?;
        result
    }

    /// Cleans up terminal state
    fn cleanup(&mut self) -> TuiResult<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
