//! Rendering tests for the Compare view

use ratatui::{Terminal, backend::TestBackend};

use jt_compare::cli::{SAMPLE_LEFT, SAMPLE_RIGHT};
use jt_compare::model::compare;
use jt_compare::ui::theme::ThemeKind;
use jt_compare::ui::views::CompareView;

use crate::{buffer_lines, contains};

fn draw(view: &CompareView, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), ThemeKind::Dark.palette(), None);
        })
        .unwrap();
    terminal
}

#[test]
fn test_compare_view_sample_pair() {
    let view = CompareView::new(compare(SAMPLE_LEFT, SAMPLE_RIGHT));
    let terminal = draw(&view, 100, 8);

    let lines = buffer_lines(&terminal);
    assert!(lines[0].contains("jt-compare - Compare"));
    assert!(lines[1].contains("Different ✕ +0 -0 ~1"));
    assert!(contains(&terminal, "Text A"));
    assert!(contains(&terminal, "Text B"));
    assert!(contains(&terminal, r#" 1 - {"id":1,"name":"Alice"}"#));
    assert!(contains(&terminal, r#" 1 + {"id":1,"name":"Alice","role":"admin"}"#));
}

#[test]
fn test_compare_view_highlights_added_tokens() {
    let palette = ThemeKind::Dark.palette();
    let view = CompareView::new(compare(SAMPLE_LEFT, SAMPLE_RIGHT));
    let terminal = draw(&view, 100, 8);

    let buffer = terminal.backend().buffer();
    let added: String = buffer
        .content()
        .iter()
        .filter(|cell| cell.bg == palette.added_token_bg)
        .map(|cell| cell.symbol())
        .collect();
    let removed = buffer
        .content()
        .iter()
        .filter(|cell| cell.bg == palette.removed_token_bg)
        .count();

    assert_eq!(added, r#","role":"admin""#);
    assert_eq!(removed, 0);
}

#[test]
fn test_compare_view_identical() {
    let view = CompareView::new(compare("{}\n[]", "{}\n[]"));
    let terminal = draw(&view, 60, 8);

    assert!(contains(&terminal, "Identical ✓ +0 -0 ~0"));
    assert!(contains(&terminal, " 2   []"));
}

#[test]
fn test_compare_view_gap_rows() {
    let view = CompareView::new(compare("a\nb", "a"));
    let terminal = draw(&view, 40, 8);

    let lines = buffer_lines(&terminal);
    // Row 2 is the column border, rows 3.. are the comparison rows
    assert!(lines[4].contains(" 2 - b"));
    assert!(lines[4].contains("   ~"));
}

#[test]
fn test_compare_view_empty_inputs() {
    let view = CompareView::new(compare("", ""));
    let terminal = draw(&view, 60, 10);

    assert!(contains(&terminal, "Identical ✓"));
    assert!(contains(&terminal, "Both texts are empty."));
}

#[test]
fn test_compare_view_scrolled() {
    let left: String = (1..=30).map(|i| format!("line {i}\n")).collect();
    let mut view = CompareView::new(compare(&left, &left));
    view.scroll_offset = 10;
    let terminal = draw(&view, 60, 10);

    let lines = buffer_lines(&terminal);
    assert!(lines[3].contains("11   line 11"));
    assert!(!contains(&terminal, "line 10 "));
}
