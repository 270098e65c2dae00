//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.
//! For empty states, use `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for overlay display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Label and color for a notification kind
fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("OK", Color::Green),
        NotificationKind::Info => ("Info", Color::Cyan),
        NotificationKind::Warning => ("Diff", Color::Yellow),
    }
}

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// the message is cut and ends with "…". Returns an empty line when
/// not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);

    // " | " + " label " + " message "
    let chrome = 3 + label.len() + 2 + 2;
    let message_width = notification.message.chars().count();

    let message = match max_width {
        Some(max) if chrome + message_width > max => {
            let available = max.saturating_sub(chrome + 1);
            if available == 0 {
                return Line::default();
            }
            let cut: String = notification.message.chars().take(available).collect();
            format!(" {cut}… ")
        }
        _ => format!(" {} ", notification.message),
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
