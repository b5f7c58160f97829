// crates/tui/src/theme.rs
//! Color themes for the reader

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeType {
    /// Default dark theme
    Dark,
    /// Light theme
    Light,
}

impl Default for ThemeType {
    fn default() -> Self {
        Self::Dark
    }
}

impl ThemeType {
    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Highlight color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Progress gauge color
    pub progress: Color,
    /// Warning color (toasts)
    pub warning: Color,
    /// Border color
    pub border: Color,
    /// Playing indicator
    pub playing: Color,
    /// Paused indicator
    pub paused: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            text: Color::White,
            text_secondary: Color::Gray,
            highlight: Color::Yellow,
            accent: Color::Cyan,
            progress: Color::Green,
            warning: Color::Yellow,
            border: Color::Gray,
            playing: Color::Green,
            paused: Color::Red,
        }
    }

    fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            highlight: Color::Blue,
            accent: Color::Magenta,
            progress: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            playing: Color::Green,
            paused: Color::Red,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.progress)
    }

    pub fn border_color(&self) -> Color {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeType::default())
    }
}
