//! Rendering tests for the Editor view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use jt_compare::cli::{SAMPLE_LEFT, SAMPLE_RIGHT};
use jt_compare::model::Notification;
use jt_compare::ui::theme::ThemeKind;
use jt_compare::ui::views::EditorView;

use crate::{buffer_lines, contains};

fn draw(view: &EditorView, notification: Option<&Notification>) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), ThemeKind::Dark.palette(), notification);
        })
        .unwrap();
    terminal
}

#[test]
fn test_editor_shows_both_texts() {
    let view = EditorView::new(SAMPLE_LEFT, SAMPLE_RIGHT);
    let terminal = draw(&view, None);

    let lines = buffer_lines(&terminal);
    assert!(lines[0].contains("jt-compare - JSON/Text Compare"));
    assert!(lines[1].contains("Text A"));
    assert!(lines[1].contains("Text B"));
    assert!(lines[2].contains(SAMPLE_LEFT));
    assert!(lines[2].contains(SAMPLE_RIGHT));
    assert!(contains(&terminal, "1 lines"));
}

#[test]
fn test_editor_insert_mode_title() {
    let mut view = EditorView::new("a", "b");
    assert!(!contains(&draw(&view, None), "[INSERT]"));

    view.handle_key(KeyEvent::from(KeyCode::Char('i')));
    assert!(contains(&draw(&view, None), "Text A [INSERT]"));
}

#[test]
fn test_editor_placeholder_for_empty_pane() {
    let view = EditorView::new("", "x");
    assert!(contains(&draw(&view, None), "Paste or type Text A"));
}

#[test]
fn test_editor_notification_in_title_bar() {
    let view = EditorView::new("a", "b");
    let notification = Notification::success("Formatted ✓");
    assert!(contains(&draw(&view, Some(&notification)), "OK  Formatted ✓"));
}
