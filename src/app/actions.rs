//! Actions triggered from the editor

use super::state::{App, View};
use crate::diff::Side;
use crate::json::{self, JsonStyle};
use crate::model::{self, Notification};
use crate::ui::views::CompareView;

impl App {
    /// Compare Text A with Text B and show the result
    pub(crate) fn run_compare(&mut self) {
        let comparison = model::compare(
            &self.editor_view.text(Side::Left),
            &self.editor_view.text(Side::Right),
        );

        tracing::info!(
            identical = comparison.is_identical(),
            rows = comparison.rows.len(),
            "comparison finished"
        );

        self.notification = Some(if comparison.is_identical() {
            Notification::success(comparison.summary())
        } else {
            Notification::warning(comparison.summary())
        });
        self.compare_view = Some(CompareView::new(comparison));
        self.go_to_view(View::Compare);
    }

    /// Exchange Text A and Text B
    pub(crate) fn swap_texts(&mut self) {
        self.editor_view.swap();
        self.compare_view = None;
        self.notify_info("Swapped Text A and Text B");
    }

    /// Empty both texts
    pub(crate) fn clear_texts(&mut self) {
        self.editor_view.clear();
        self.compare_view = None;
        self.notify_info("Cleared");
    }

    /// Pretty-print or minify the selection of the focused pane, or the
    /// whole pane when nothing is selected
    pub(crate) fn format_focused(&mut self, style: JsonStyle) {
        let side = self.editor_view.focus;
        let selection = self.editor_view.selected_text(side);
        let text = selection
            .clone()
            .unwrap_or_else(|| self.editor_view.text(side));

        match json::format_json(&text, style, side.label()) {
            Ok(formatted) => {
                if selection.is_some() {
                    self.editor_view.replace_selection(side, &formatted);
                } else {
                    self.editor_view.set_text(side, &formatted);
                }
                self.notify_success(style.done_message());
            }
            Err(e) => {
                tracing::warn!(side = side.label(), position = ?e.position(), error = %e, "format failed");
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Switch between the dark and light theme
    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.notify_info(format!("Theme: {}", self.theme.label()));
    }

    /// Set a success notification
    pub(crate) fn notify_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::success(message));
    }

    /// Set an info notification
    pub(crate) fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::info(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Inputs;
    use crate::model::{DIFFERENT_SUMMARY, IDENTICAL_SUMMARY, NotificationKind};
    use crate::ui::theme::ThemeKind;

    fn app_with(left: &str, right: &str) -> App {
        let inputs = Inputs {
            left: left.to_string(),
            right: right.to_string(),
        };
        App::with_inputs(&inputs, ThemeKind::Dark)
    }

    #[test]
    fn test_run_compare_identical() {
        let mut app = app_with("{}", "{}");
        app.run_compare();

        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.message, IDENTICAL_SUMMARY);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(app.current_view, View::Compare);
        assert!(app.compare_view.as_ref().unwrap().comparison.is_identical());
    }

    #[test]
    fn test_run_compare_sample_differs() {
        let mut app = App::new();
        app.run_compare();

        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.message, DIFFERENT_SUMMARY);
        assert_eq!(notification.kind, NotificationKind::Warning);
        let stats = app.compare_view.as_ref().unwrap().comparison.stats;
        assert_eq!(stats.changed, 1);
    }

    #[test]
    fn test_swap_drops_result() {
        let mut app = app_with("a", "b");
        app.run_compare();
        app.swap_texts();
        assert!(app.compare_view.is_none());
        assert_eq!(app.text(Side::Left), "b");
        assert_eq!(app.text(Side::Right), "a");
    }

    #[test]
    fn test_clear_drops_result() {
        let mut app = app_with("a", "b");
        app.run_compare();
        app.clear_texts();
        assert!(app.compare_view.is_none());
        assert_eq!(app.text(Side::Left), "");
        assert_eq!(app.text(Side::Right), "");
    }

    #[test]
    fn test_format_focused_pretty() {
        let mut app = app_with(r#"{"a":1}"#, "");
        app.format_focused(JsonStyle::Pretty);
        assert_eq!(app.text(Side::Left), "{\n  \"a\": 1\n}");
        assert_eq!(app.notification.as_ref().unwrap().message, "Formatted ✓");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_format_focused_error_keeps_text() {
        let mut app = app_with("{", "{}");
        app.format_focused(JsonStyle::Minify);
        assert_eq!(app.text(Side::Left), "{");
        assert!(
            app.error_message
                .as_deref()
                .unwrap()
                .starts_with("Text A: Invalid JSON: ")
        );
    }

    #[test]
    fn test_format_empty_side_reports_label() {
        let mut app = app_with("{}", "");
        app.editor_view.toggle_focus();
        app.format_focused(JsonStyle::Pretty);
        assert_eq!(app.error_message.as_deref(), Some("Text B is empty"));
    }

    #[test]
    fn test_toggle_theme_notifies() {
        let mut app = App::new();
        app.toggle_theme();
        assert_eq!(app.theme, ThemeKind::Light);
        assert_eq!(app.notification.as_ref().unwrap().message, "Theme: light");
    }
}
