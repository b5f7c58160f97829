// crates/tui/src/ui/picker.rs
//! Start screen: choose the reading mode

use crate::ui::RenderContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the mode picker
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "\u{1f4d6} Picturebook",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} pages", ctx.model.total_pages),
            theme.text_secondary_style(),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "1 \u{2014} Read to me (turns pages automatically)",
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "2 \u{2014} I'll read myself (you turn the pages)",
            theme.text_style(),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("q \u{2014} Quit", theme.text_secondary_style())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color())),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
