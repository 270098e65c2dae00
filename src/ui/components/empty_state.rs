//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Empty state for a comparison of two empty texts
pub fn nothing_to_compare_state() -> Paragraph<'static> {
    empty_state(
        "Both texts are empty.",
        Some("Press q to go back and enter some text."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn rendered(para: Paragraph<'static>) -> String {
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        para.render(area, &mut buf);
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_state_with_hint() {
        let text = rendered(empty_state("No items", Some("Try adding some")));
        assert!(text.contains("No items"));
        assert!(text.contains("Try adding some"));
    }

    #[test]
    fn test_nothing_to_compare_state() {
        assert!(rendered(nothing_to_compare_state()).contains("Both texts are empty."));
    }
}
