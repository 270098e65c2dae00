//! Help panel widget
//!
//! Lists every key binding, grouped by the view it applies to.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;
use crate::ui::theme::Palette;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Editor", keys::EDITOR_KEYS);
    push_section(&mut lines, "Editing", keys::INSERT_KEYS);
    push_section(&mut lines, "Compare View", keys::COMPARE_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16, palette: &Palette) {
    let title = Line::from(" jt-compare - Help ")
        .bold()
        .fg(palette.title)
        .centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .style(Style::default().fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .title(title),
            )
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_lines_cover_every_section() {
        let text: Vec<String> = build_help_lines().iter().map(plain).collect();
        for section in ["Global:", "Editor:", "Editing:", "Compare View:"] {
            assert!(text.iter().any(|l| l == section), "missing {section}");
        }
    }

    #[test]
    fn test_help_lines_entry_count() {
        let entries = build_help_lines()
            .iter()
            .filter(|l| l.spans.len() == 2)
            .count();
        let expected = keys::GLOBAL_KEYS.len()
            + keys::EDITOR_KEYS.len()
            + keys::INSERT_KEYS.len()
            + keys::COMPARE_KEYS.len();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_help_entry_layout() {
        let lines = build_help_lines();
        let compare = lines
            .iter()
            .map(plain)
            .find(|l| l.contains("Compare") && l.starts_with("  c"))
            .unwrap();
        assert_eq!(compare, "  c         Compare");
    }
}
