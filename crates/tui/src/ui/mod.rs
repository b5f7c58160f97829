// crates/tui/src/ui/mod.rs
//! UI rendering modules

pub mod controls;
pub mod page;
pub mod picker;

use crate::surface::UiModel;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Read-only snapshot the renderer draws from
pub struct RenderContext<'a> {
    pub model: &'a UiModel,
    pub started: bool,
    pub playing: bool,
    /// File name of the current page image
    pub page_image: String,
    pub theme: &'a Theme,
}

/// Hit-test information the input handler needs back from the renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelLayout {
    /// Where the page panel landed; taps and swipes are mapped against it
    pub page_area: Rect,
}

/// Renders the whole UI; start screen or reader view
pub fn render(frame: &mut Frame, ctx: &RenderContext) -> PanelLayout {
    if !ctx.started {
        let area = frame.area();
        picker::render(frame, area, ctx);
        return PanelLayout::default();
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Page panel
            Constraint::Length(3), // Progress
            Constraint::Length(6), // Controls
            Constraint::Length(3), // Status / toast
        ])
        .split(frame.area());

    page::render(frame, chunks[0], ctx);
    page::render_progress(frame, chunks[1], ctx);
    controls::render(frame, chunks[2], ctx);
    render_status_bar(frame, chunks[3], ctx);

    PanelLayout {
        page_area: chunks[0],
    }
}

/// Renders the status bar; a toast takes priority over the key hints
fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;

    let (text, style) = match ctx.model.toast.as_ref() {
        Some(toast) => (toast.message.clone(), theme.warning_style()),
        None => (
            "q: Quit | \u{2190}/\u{2192}: Turn | Space: Play/Pause | a: Mode | m: Mute | r: Restart"
                .to_string(),
            theme.text_secondary_style(),
        ),
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            " \u{25cf} ",
            Style::default().fg(if ctx.playing {
                theme.playing
            } else {
                theme.paused
            }),
        ),
        Span::styled(text, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );

    frame.render_widget(status, area);
}
