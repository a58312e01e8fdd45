//! Detail view layout, independent of styling

use crate::catalog::Technique;

/// One line of the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Title { name: String, version: String },
    /// Labelled single value, e.g. `Definition: ...`
    Field { label: &'static str, value: String },
    /// Extra lines of a multi-line field value
    Continuation(String),
    Heading(&'static str),
    Bullet(String),
    Code(String),
    Output(String),
    Note(String),
    DemoNote(String),
    Separator,
}

/// Lay out a technique in display order. Optional sections are left out
/// entirely when their source field is empty.
pub fn detail_lines(tech: &Technique) -> Vec<DetailLine> {
    let mut lines = vec![DetailLine::Title {
        name: tech.name.clone(),
        version: tech.cpp_version.clone(),
    }];

    push_field(&mut lines, "Definition", &tech.definition);

    if !tech.use_cases().is_empty() {
        lines.push(DetailLine::Heading("Use Cases"));
        lines.extend(tech.use_cases().iter().cloned().map(DetailLine::Bullet));
    }

    push_field(&mut lines, "Syntax", &tech.syntax);
    lines.push(DetailLine::Separator);

    lines.push(DetailLine::Heading("Code Demo"));
    lines.extend(tech.demo_code.lines().map(|l| DetailLine::Code(l.to_string())));

    if !tech.expected_output.is_empty() {
        lines.push(DetailLine::Heading("Expected Output"));
        lines.extend(
            tech.expected_output
                .lines()
                .map(|l| DetailLine::Output(l.to_string())),
        );
    }

    push_list(&mut lines, "Best Practices", &tech.best_practices);
    push_list(&mut lines, "Advantages", &tech.advantages);

    lines.extend(tech.notes.lines().map(|l| DetailLine::Note(l.to_string())));
    lines.extend(
        tech.demo_note
            .lines()
            .map(|l| DetailLine::DemoNote(l.to_string())),
    );

    lines
}

fn push_field(lines: &mut Vec<DetailLine>, label: &'static str, value: &str) {
    let mut parts = value.lines();
    lines.push(DetailLine::Field {
        label,
        value: parts.next().unwrap_or_default().to_string(),
    });
    lines.extend(parts.map(|l| DetailLine::Continuation(l.to_string())));
}

fn push_list(lines: &mut Vec<DetailLine>, heading: &'static str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(DetailLine::Heading(heading));
    lines.extend(items.iter().cloned().map(DetailLine::Bullet));
}
