// crates/tui/src/ui/page.rs
//! Page panel and progress rendering

use crate::surface::RevealPhase;
use crate::ui::RenderContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Renders the page panel
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let model = ctx.model;

    let title = format!(" Page {} / {} ", model.page, model.total_pages);

    let mut lines = vec![Line::from("")];
    if model.loading {
        lines.push(Line::from(Span::styled(
            "Loading\u{2026}",
            theme.highlight_style(),
        )));
    } else {
        match model.reveal {
            // One blank frame between reset and reveal
            RevealPhase::Resetting => {}
            RevealPhase::Visible => {
                lines.push(Line::from(Span::styled(
                    format!("\u{1f5bc}  {}", ctx.page_image),
                    theme.accent_style().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "(tap or \u{2192} to turn)",
                    theme.text_secondary_style(),
                )));
            }
            RevealPhase::Hidden => {
                lines.push(Line::from(Span::styled(
                    "Image unavailable",
                    theme.text_secondary_style(),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title(title),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Renders the progress gauge
pub fn render_progress(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let percent = ctx.model.progress_percent.clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("Progress"),
        )
        .gauge_style(theme.progress_style())
        .percent(percent);

    frame.render_widget(gauge, area);
}
