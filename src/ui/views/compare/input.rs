//! Key handling for CompareView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{CompareAction, CompareView};

impl CompareView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> CompareAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_height: usize) -> CompareAction {
        // Always update visible_height to ensure accurate scroll bounds
        self.visible_height = visible_height;

        if keys::is_half_page_down(&key) {
            self.scroll_half_page_down(visible_height);
            return CompareAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.scroll_half_page_up(visible_height);
            return CompareAction::None;
        }

        match key.code {
            code if keys::is_move_down(code) => self.scroll_down(),
            code if keys::is_move_up(code) => self.scroll_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(visible_height),
            keys::NEXT_CHANGE => self.next_change(),
            keys::PREV_CHANGE => self.prev_change(),
            keys::QUIT | keys::ESC => return CompareAction::Back,
            _ => {}
        }
        CompareAction::None
    }
}
