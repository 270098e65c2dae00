//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{CompareAction, CompareView, EditorAction, EditorMode};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_force_quit(&key) {
            self.quit();
            return;
        }

        // While editing, every key except Esc belongs to the text
        if self.current_view == View::Editor && self.editor_view.mode == EditorMode::Insert {
            let action = self.editor_view.handle_key(key);
            self.handle_editor_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::THEME => {
                self.toggle_theme();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Editor {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Editor {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Editor => {
                let action = self.editor_view.handle_key(key);
                self.handle_editor_action(action);
            }
            View::Compare => {
                let main_height = self.last_frame_height.get().saturating_sub(1);
                let visible = CompareView::visible_rows(main_height);
                if let Some(ref mut compare_view) = self.compare_view {
                    let action = compare_view.handle_key_with_height(key, visible);
                    self.handle_compare_action(action);
                }
            }
            View::Help => match key.code {
                code if keys::is_move_down(code) => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                code if keys::is_move_up(code) => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                keys::GO_TOP => self.help_scroll = 0,
                _ => {}
            },
        }
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::None => {}
            EditorAction::Compare => self.run_compare(),
            EditorAction::Swap => self.swap_texts(),
            EditorAction::Clear => self.clear_texts(),
            EditorAction::Format(style) => self.format_focused(style),
        }
    }

    fn handle_compare_action(&mut self, action: CompareAction) {
        match action {
            CompareAction::None => {}
            CompareAction::Back => self.go_back(),
        }
    }
}
