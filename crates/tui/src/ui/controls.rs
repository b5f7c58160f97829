// crates/tui/src/ui/controls.rs
//! Control bar rendering

use crate::ui::RenderContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the controls bar with the current labels
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let model = ctx.model;

    let status = if ctx.playing {
        "\u{25b6} Playing"
    } else {
        "\u{23f8} Paused"
    };

    let lines = vec![
        Line::from(Span::styled(
            status,
            Style::default()
                .fg(if ctx.playing {
                    theme.playing
                } else {
                    theme.paused
                })
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{2190} Prev", theme.text_style()),
            Span::raw("   "),
            Span::styled(format!("[{}]", model.play_pause_label), theme.highlight_style()),
            Span::raw("   "),
            Span::styled("Next \u{2192}", theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("a: {}", model.mode_toggle_label), theme.text_secondary_style()),
            Span::raw("  |  "),
            Span::styled(format!("m: {}", model.mute_label), theme.text_secondary_style()),
            Span::raw("  |  "),
            Span::styled("r: Restart", theme.text_secondary_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color()))
                .title("Controls"),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
