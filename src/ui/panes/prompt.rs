//! Selection prompt with the options of the current screen

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render `options` as `key label` pairs followed by the typed input.
pub fn render_prompt(frame: &mut Frame, area: Rect, options: &[(&str, &str)], input: &str) {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut spans = Vec::new();
    for (key, label) in options {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {}  ", label), desc_style));
    }
    spans.push(Span::styled(
        "Select: ",
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.title)));
    spans.push(Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.comment));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
