//! Main menu pane: the numbered technique list

use crate::catalog::Technique;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the numbered list, `1..=n` for techniques and `0` for exit.
///
/// `cursor` is the highlighted technique; `scroll_offset` is adjusted so the
/// cursor stays visible.
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    techniques: &[Technique],
    cursor: usize,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" MODERN C++ TECHNIQUES ")
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.border)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 0, 0, 0));

    let number_width = techniques.len().max(1).to_string().len();
    let mut rows: Vec<Line> = techniques
        .iter()
        .enumerate()
        .map(|(i, tech)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>width$}. ", i + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
                Span::styled(tech.name.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ];
            if !tech.cpp_version.is_empty() {
                spans.push(Span::styled(
                    format!("  ({})", tech.cpp_version),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            let mut line = Line::from(spans);
            if i == cursor {
                line = line.style(
                    Style::default()
                        .bg(DEFAULT_THEME.selected_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }
            line
        })
        .collect();

    rows.push(Line::from(Span::styled(
        format!("{:>width$}. Exit", 0, width = number_width),
        Style::default().fg(DEFAULT_THEME.title),
    )));

    let total = rows.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    *scroll_offset = clamp_scroll(*scroll_offset, cursor, visible_height, total);

    let visible: Vec<Line> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Keep `cursor` inside the window `[offset, offset + visible)` and the window
/// inside `[0, total)`.
pub fn clamp_scroll(offset: usize, cursor: usize, visible: usize, total: usize) -> usize {
    let mut offset = offset;
    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + visible {
        offset = cursor + 1 - visible;
    }
    offset.min(total.saturating_sub(visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(0, 0, 10, 5), 0);
        assert_eq!(clamp_scroll(0, 12, 10, 30), 3);
        assert_eq!(clamp_scroll(8, 4, 10, 30), 4);
        assert_eq!(clamp_scroll(25, 29, 10, 30), 20);
        assert_eq!(clamp_scroll(3, 5, 10, 8), 0);
    }
}
