//! Key handling for EditorView

use crossterm::event::KeyEvent;

use crate::json::JsonStyle;
use crate::keys;

use super::{EditorAction, EditorMode, EditorView};

impl EditorView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        match self.mode {
            EditorMode::Normal => self.handle_normal_key(key),
            EditorMode::Insert => self.handle_insert_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            keys::INSERT | keys::INSERT_ENTER => {
                self.start_insert();
                EditorAction::None
            }
            keys::SWITCH_PANE => {
                self.toggle_focus();
                EditorAction::None
            }
            keys::COMPARE => EditorAction::Compare,
            keys::SWAP => EditorAction::Swap,
            keys::CLEAR => EditorAction::Clear,
            keys::PRETTY => EditorAction::Format(JsonStyle::Pretty),
            keys::MINIFY => EditorAction::Format(JsonStyle::Minify),
            _ => EditorAction::None,
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) -> EditorAction {
        if key.code == keys::ESC {
            self.stop_insert();
            return EditorAction::None;
        }

        // All other keys go to the textarea (Enter = newline, cursor movement, etc.)
        let focus = self.focus;
        self.textarea_mut(focus).input(key);
        EditorAction::None
    }
}
