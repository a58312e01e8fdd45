//! Technique detail pane
//!
//! Styles the [`DetailLine`] layout from the explorer and shows it as a
//! scrollable page.

use crate::catalog::Technique;
use crate::explorer::{detail_lines, DetailLine};
use crate::ui::panes::code::highlight_cpp_line;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Convert the detail layout into styled lines.
pub fn styled_detail_lines(tech: &Technique) -> Vec<Line<'static>> {
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    detail_lines(tech)
        .into_iter()
        .map(|line| match line {
            DetailLine::Title { name, version } => {
                let mut spans = vec![Span::styled(
                    name,
                    bold(DEFAULT_THEME.title).add_modifier(Modifier::UNDERLINED),
                )];
                if !version.is_empty() {
                    spans.push(Span::raw("  ("));
                    spans.push(Span::styled(version, Style::default().fg(DEFAULT_THEME.success)));
                    spans.push(Span::raw(")"));
                }
                Line::from(spans)
            }
            DetailLine::Field { label, value } => {
                let color = if label == "Syntax" {
                    DEFAULT_THEME.title
                } else {
                    DEFAULT_THEME.heading
                };
                Line::from(vec![
                    Span::styled(format!("{}: ", label), bold(color)),
                    Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
                ])
            }
            DetailLine::Continuation(text) => {
                Line::from(Span::styled(format!("  {}", text), Style::default().fg(DEFAULT_THEME.fg)))
            }
            DetailLine::Heading(text) => {
                let color = match text {
                    "Code Demo" => DEFAULT_THEME.error,
                    "Expected Output" => DEFAULT_THEME.success,
                    "Use Cases" => DEFAULT_THEME.primary,
                    "Advantages" => DEFAULT_THEME.title,
                    _ => DEFAULT_THEME.heading,
                };
                Line::from(Span::styled(format!("{}:", text), bold(color)))
            }
            DetailLine::Bullet(text) => Line::from(vec![
                Span::styled("  - ", Style::default().fg(DEFAULT_THEME.border)),
                Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
            ]),
            DetailLine::Code(text) => {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(highlight_cpp_line(&text).spans);
                Line::from(spans)
            }
            DetailLine::Output(text) => {
                Line::from(Span::styled(format!("  {}", text), Style::default().fg(DEFAULT_THEME.success)))
            }
            DetailLine::Note(text) => Line::from(vec![
                Span::styled("Note: ", bold(DEFAULT_THEME.primary)),
                Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
            ]),
            DetailLine::DemoNote(text) => Line::from(vec![
                Span::styled(
                    "[Demo Note] ",
                    bold(DEFAULT_THEME.error).add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
            ]),
            DetailLine::Separator => Line::from(Span::styled(
                "─".repeat(60),
                Style::default().fg(DEFAULT_THEME.border),
            )),
        })
        .collect()
}

/// Break a styled line into rows of at most `width` characters.
///
/// Breaks after the last space that fits; a word longer than `width` is cut
/// hard. Span styles are kept across the break.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let cells: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    if cells.len() <= width {
        return vec![line];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let mut end = (start + width).min(cells.len());
        if end < cells.len() {
            if let Some(space) = cells[start..end].iter().rposition(|&(c, _)| c == ' ') {
                if space > 0 {
                    end = start + space + 1;
                }
            }
        }
        rows.push(Line::from(merge_cells(&cells[start..end])).style(line.style));
        start = end;
    }
    rows
}

/// Rebuild spans from per-character styles, merging equal neighbours
fn merge_cells(cells: &[(char, Style)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for &(c, style) in cells {
        if current.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(style);
        text.push(c);
    }
    if let Some(style) = current {
        spans.push(Span::styled(text, style));
    }
    spans
}

/// Render the detail page. `scroll_offset` is clamped to the wrapped content.
pub fn render_detail_pane(frame: &mut Frame, area: Rect, tech: &Technique, scroll_offset: &mut usize) {
    // Borders (2) plus left/right padding (2)
    let text_width = area.width.saturating_sub(4).max(1) as usize;
    let lines: Vec<Line> = styled_detail_lines(tech)
        .into_iter()
        .flat_map(|line| wrap_line(line, text_width))
        .collect();

    let total = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let title = if max_scroll > 0 {
        format!(" Technique ({}/{}) ", (*scroll_offset + visible_height).min(total), total)
    } else {
        " Technique ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0));

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(tech: &Technique, width: u16, height: u16, scroll: &mut usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_detail_pane(f, f.area(), tech, scroll))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        let line = Line::from(vec![
            Span::styled("Definition: ", Style::default().fg(DEFAULT_THEME.heading)),
            Span::raw("alpha beta gamma delta"),
        ]);
        let rows = wrap_line(line, 16);
        let texts: Vec<String> = rows.iter().map(text).collect();
        assert_eq!(texts, ["Definition: ", "alpha beta ", "gamma delta"]);
        assert_eq!(rows[0].spans[0].style.fg, Some(DEFAULT_THEME.heading));
    }

    #[test]
    fn test_wrap_cuts_long_words() {
        let rows = wrap_line(Line::from("abcdefghij"), 4);
        let texts: Vec<String> = rows.iter().map(text).collect();
        assert_eq!(texts, ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_short_line_is_untouched() {
        let rows = wrap_line(Line::from("short"), 40);
        assert_eq!(rows.len(), 1);
        assert_eq!(text(&rows[0]), "short");
    }

    #[test]
    fn test_long_definition_is_fully_rendered() {
        let mut tech = Technique::new("Long");
        tech.definition = format!("{} TAILMARKER", "word ".repeat(30));
        let mut scroll = 0;
        let screen = render(&tech, 80, 24, &mut scroll);
        assert!(screen.contains("TAILMARKER"), "definition tail not rendered");
    }

    #[test]
    fn test_scroll_reaches_last_wrapped_row() {
        let mut tech = Technique::new("Scroll");
        tech.best_practices = vec![format!("{} ENDMARKER", "practice ".repeat(40))];
        let mut scroll = usize::MAX;
        let screen = render(&tech, 30, 8, &mut scroll);
        assert!(scroll > 0);
        assert!(screen.contains("ENDMARKER"));
    }
}
