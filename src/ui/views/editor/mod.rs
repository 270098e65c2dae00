//! Editor View
//!
//! Two text panes (Text A and Text B) edited in place, vim-style:
//! Normal mode runs commands, Insert mode sends keys to the focused pane.

mod input;
mod render;

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::diff::{Side, split_lines};
use crate::json::JsonStyle;

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Keys edit the focused pane
    Insert,
}

/// Action returned by EditorView key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// No action needed
    None,
    /// Compare both texts
    Compare,
    /// Swap Text A and Text B
    Swap,
    /// Clear both texts
    Clear,
    /// Reformat the focused pane as JSON
    Format(JsonStyle),
}

/// Editor view state
#[derive(Debug)]
pub struct EditorView {
    left: TextArea<'static>,
    right: TextArea<'static>,
    /// Pane receiving input
    pub focus: Side,
    /// Current editing mode
    pub mode: EditorMode,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl EditorView {
    /// Create an editor holding the two texts
    pub fn new(left: &str, right: &str) -> Self {
        let mut view = Self {
            left: build_textarea(left, Side::Left),
            right: build_textarea(right, Side::Right),
            focus: Side::Left,
            mode: EditorMode::Normal,
        };
        view.refresh_cursors();
        view
    }

    /// Current text of a pane
    pub fn text(&self, side: Side) -> String {
        self.textarea(side).lines().join("\n")
    }

    /// Replace the text of a pane
    pub fn set_text(&mut self, side: Side, text: &str) {
        *self.textarea_mut(side) = build_textarea(text, side);
        self.refresh_cursors();
    }

    /// Text selected in a pane, if any
    pub fn selected_text(&self, side: Side) -> Option<String> {
        let textarea = self.textarea(side);
        let ((start_row, start_col), (end_row, end_col)) = textarea.selection_range()?;
        if (start_row, start_col) == (end_row, end_col) {
            return None;
        }

        let lines = textarea.lines();
        let selected: Vec<String> = (start_row..=end_row)
            .map(|row| {
                let from = if row == start_row { start_col } else { 0 };
                let line = lines[row].chars().skip(from);
                if row == end_row {
                    line.take(end_col - from).collect()
                } else {
                    line.collect()
                }
            })
            .collect();
        Some(selected.join("\n"))
    }

    /// Replace the selection of a pane with `text`
    pub fn replace_selection(&mut self, side: Side, text: &str) {
        self.textarea_mut(side).insert_str(text);
    }

    /// Exchange Text A and Text B
    pub fn swap(&mut self) {
        let left = self.text(Side::Left);
        let right = self.text(Side::Right);
        self.set_text(Side::Left, &right);
        self.set_text(Side::Right, &left);
    }

    /// Empty both panes and return focus to Text A
    pub fn clear(&mut self) {
        self.set_text(Side::Left, "");
        self.set_text(Side::Right, "");
        self.focus = Side::Left;
        self.refresh_cursors();
    }

    /// Move focus to the other pane
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
        self.refresh_cursors();
    }

    /// Enter insert mode on the focused pane
    pub fn start_insert(&mut self) {
        self.mode = EditorMode::Insert;
        self.refresh_cursors();
    }

    /// Return to normal mode
    pub fn stop_insert(&mut self) {
        self.mode = EditorMode::Normal;
        self.refresh_cursors();
    }

    /// Number of lines in a pane
    pub fn line_count(&self, side: Side) -> usize {
        self.textarea(side).lines().len()
    }

    fn textarea(&self, side: Side) -> &TextArea<'static> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn textarea_mut(&mut self, side: Side) -> &mut TextArea<'static> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Only the pane being edited shows a cursor
    fn refresh_cursors(&mut self) {
        for side in [Side::Left, Side::Right] {
            let editing = self.mode == EditorMode::Insert && self.focus == side;
            let style = if editing {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            self.textarea_mut(side).set_cursor_style(style);
        }
    }
}

fn build_textarea(text: &str, side: Side) -> TextArea<'static> {
    let mut textarea = if text.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(split_lines(text).into_iter().map(str::to_string).collect())
    };
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(format!("Paste or type {}", side.label()));
    textarea
}
