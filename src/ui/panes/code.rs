//! Lightweight C++ highlighting for demo code lines
//!
//! Word-level only: no lexer, no multi-line state. Block comments spanning
//! lines are shown unhighlighted.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Highlight one line of C++ source.
pub fn highlight_cpp_line(line: &str) -> Line<'static> {
    if line.trim_start().starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.preprocessor),
        ));
    }

    let mut spans = Vec::new();
    let mut word = String::new();
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        // Line comment runs to the end
        if c == '/' && chars.peek().is_some_and(|&(_, n)| n == '/') {
            flush_word(&mut spans, &mut word, false);
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut word, false);
            let mut literal = String::from(c);
            let mut escaped = false;
            for (_, n) in chars.by_ref() {
                literal.push(n);
                if escaped {
                    escaped = false;
                } else if n == '\\' {
                    escaped = true;
                } else if n == c {
                    break;
                }
            }
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            continue;
        }

        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        flush_word(&mut spans, &mut word, c == '(');
        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    flush_word(&mut spans, &mut word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "int" | "char" | "void" | "bool" | "float" | "double" | "long" | "short" | "unsigned"
        | "signed" | "auto" | "size_t" => Style::default().fg(DEFAULT_THEME.type_name),
        "struct" | "class" | "return" | "if" | "else" | "while" | "for" | "do" | "switch"
        | "case" | "default" | "break" | "continue" | "template" | "typename" | "concept"
        | "requires" | "constexpr" | "consteval" | "inline" | "const" | "static" | "using"
        | "namespace" | "co_await" | "co_yield" | "co_return" | "this" | "operator"
        | "noexcept" | "decltype" | "public" | "private" | "virtual" | "override" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "nullptr" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().next().is_some_and(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.title),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_roundtrips_text() {
        for src in [
            "int main() { return 0; }",
            "    std::cout << \"a \\\"quoted\\\" word\" << '\\n'; // done",
            "auto [x, y] = std::pair{1, 2};",
            "",
            "  // ünïcode comment",
        ] {
            assert_eq!(text(&highlight_cpp_line(src)), src);
        }
    }

    #[test]
    fn test_preprocessor_line_is_single_span() {
        let line = highlight_cpp_line("#include <concepts>");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.preprocessor));
    }

    #[test]
    fn test_keyword_and_comment_styles() {
        let line = highlight_cpp_line("return x; // note");
        assert_eq!(line.spans[0].content, "return");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "// note");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }
}
