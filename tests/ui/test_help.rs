//! Rendering tests for the Help panel

use ratatui::{Terminal, backend::TestBackend};

use jt_compare::ui::theme::ThemeKind;
use jt_compare::ui::widgets::render_help_panel;

use crate::{buffer_lines, contains};

#[test]
fn test_help_panel_full() {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 0, ThemeKind::Dark.palette());
        })
        .unwrap();

    assert!(contains(&terminal, "jt-compare - Help"));
    assert!(contains(&terminal, "Key bindings:"));
    assert!(contains(&terminal, "Compare View:"));
    assert!(contains(&terminal, "Toggle dark/light theme"));
    assert!(contains(&terminal, "Next/previous change"));
}

#[test]
fn test_help_panel_scrolled() {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 2, ThemeKind::Dark.palette());
        })
        .unwrap();

    let lines = buffer_lines(&terminal);
    // Row 0 is the border, row 1 the first visible line after scrolling
    assert!(lines[1].contains("Global:"));
    assert!(!contains(&terminal, "Key bindings:"));
}
