//! Rendering tests for the whole application frame

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend, style::Color};

use jt_compare::app::App;

use crate::{buffer_lines, contains};

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::from(code));
}

#[test]
fn test_app_editor_status_bar() {
    let app = App::new();
    let terminal = draw(&app);

    let lines = buffer_lines(&terminal);
    let status = lines.last().unwrap();
    assert!(status.contains("NORMAL"));
    assert!(status.contains("Text A"));
    assert!(status.contains("[c] Compare"));
}

#[test]
fn test_app_compare_flow() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('c'));
    let terminal = draw(&app);

    assert!(contains(&terminal, "Different ✕ +0 -0 ~1"));
    let lines = buffer_lines(&terminal);
    let status = lines.last().unwrap();
    assert!(status.contains("change 1/1"));
    assert!(status.contains("[n/N] Change"));

    press(&mut app, KeyCode::Char('q'));
    assert!(contains(&draw(&app), "jt-compare - JSON/Text Compare"));
}

#[test]
fn test_app_insert_mode_status_bar() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('i'));
    let terminal = draw(&app);

    let lines = buffer_lines(&terminal);
    let status = lines.last().unwrap();
    assert!(status.contains("INSERT"));
    assert!(status.contains("[Esc] Done"));
    assert!(!status.contains("[c] Compare"));
}

#[test]
fn test_app_error_banner() {
    let mut app = App::new();
    app.error_message = Some("Text A: Invalid JSON: EOF".to_string());
    let terminal = draw(&app);

    let lines = buffer_lines(&terminal);
    assert!(lines[lines.len() - 3].contains("Error:  Text A: Invalid JSON: EOF"));
}

#[test]
fn test_app_light_theme_background() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('t'));
    let terminal = draw(&app);

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(60, 8)].bg, Color::White);
}

#[test]
fn test_app_help_view() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('?'));
    let terminal = draw(&app);

    assert!(contains(&terminal, "jt-compare - Help"));
    let lines = buffer_lines(&terminal);
    assert!(lines.last().unwrap().contains("[q] Back"));
}
