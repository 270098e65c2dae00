//! Application state and view management

use std::cell::Cell;

use crate::cli::Inputs;
use crate::diff::Side;
use crate::model::Notification;
use crate::ui::theme::ThemeKind;
use crate::ui::views::{CompareView, EditorView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Editor,
    Compare,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Editor holding Text A and Text B
    pub editor_view: EditorView,
    /// Result of the last compare (dropped when the texts are swapped or cleared)
    pub compare_view: Option<CompareView>,
    /// Active color theme
    pub theme: ThemeKind,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Last known frame height (updated during render, uses Cell for interior mutability)
    pub(crate) last_frame_height: Cell<u16>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] seeded with the sample pair.
    pub fn new() -> Self {
        Self::with_inputs(&Inputs::sample(), ThemeKind::default())
    }

    /// Construct an [`App`] editing the given texts
    pub fn with_inputs(inputs: &Inputs, theme: ThemeKind) -> Self {
        Self {
            running: true,
            current_view: View::Editor,
            previous_view: None,
            editor_view: EditorView::new(&inputs.left, &inputs.right),
            compare_view: None,
            theme,
            error_message: None,
            notification: None,
            help_scroll: 0,
            last_frame_height: Cell::new(24), // Default terminal height
        }
    }

    /// Current text of one side
    pub fn text(&self, side: Side) -> String {
        self.editor_view.text(side)
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            if view == View::Help {
                self.help_scroll = 0;
            }
            tracing::debug!(from = ?self.current_view, to = ?view, "switching view");
            self.previous_view = Some(self.current_view);
            self.current_view = view;
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        let prev = self.previous_view.take().unwrap_or_default();
        // A compare result may have been dropped while Help was open
        self.current_view = if prev == View::Compare && self.compare_view.is_none() {
            View::Editor
        } else {
            prev
        };
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
