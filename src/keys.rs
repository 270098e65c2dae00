//! Keybinding definitions for jt-compare
//!
//! All keybindings are defined here: input handling, status bar hints and
//! the help panel read from this module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::ui::views::EditorMode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (always quits)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+D or PageDown
pub fn is_half_page_down(key: &KeyEvent) -> bool {
    key.code == KeyCode::PageDown
        || (key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key is Ctrl+U or PageUp
pub fn is_half_page_up(key: &KeyEvent) -> bool {
    key.code == KeyCode::PageUp
        || (key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL))
}

// =============================================================================
// Global keys (available in all views, outside insert mode)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Go back / leave insert mode
pub const ESC: KeyCode = KeyCode::Esc;

/// Toggle dark/light theme
pub const THEME: KeyCode = KeyCode::Char('t');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Editor View keys
// =============================================================================

/// Start editing the focused pane
pub const INSERT: KeyCode = KeyCode::Char('i');

/// Start editing the focused pane (alternative)
pub const INSERT_ENTER: KeyCode = KeyCode::Enter;

/// Switch focus between Text A and Text B
pub const SWITCH_PANE: KeyCode = KeyCode::Tab;

/// Compare both texts
pub const COMPARE: KeyCode = KeyCode::Char('c');

/// Swap Text A and Text B
pub const SWAP: KeyCode = KeyCode::Char('s');

/// Clear both texts (uppercase, destructive)
pub const CLEAR: KeyCode = KeyCode::Char('D');

/// Pretty-print the focused pane as JSON
pub const PRETTY: KeyCode = KeyCode::Char('f');

/// Minify the focused pane as JSON
pub const MINIFY: KeyCode = KeyCode::Char('m');

// =============================================================================
// Compare View keys
// =============================================================================

/// Jump to next change
pub const NEXT_CHANGE: KeyCode = KeyCode::Char('n');

/// Jump to previous change
pub const PREV_CHANGE: KeyCode = KeyCode::Char('N');

// =============================================================================
// Help panel entries
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "t",
        description: "Toggle dark/light theme",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit immediately",
    },
];

/// Editor key bindings for help display
pub const EDITOR_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "i/Enter",
        description: "Edit focused text",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch Text A / Text B",
    },
    KeyBindEntry {
        key: "c",
        description: "Compare",
    },
    KeyBindEntry {
        key: "s",
        description: "Swap texts",
    },
    KeyBindEntry {
        key: "D",
        description: "Clear both texts",
    },
    KeyBindEntry {
        key: "f",
        description: "Pretty-print JSON",
    },
    KeyBindEntry {
        key: "m",
        description: "Minify JSON",
    },
];

/// Insert mode key bindings for help display
pub const INSERT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Esc",
        description: "Stop editing",
    },
    KeyBindEntry {
        key: "Shift+←/→",
        description: "Select text for f/m",
    },
    KeyBindEntry {
        key: "Ctrl+u/r",
        description: "Undo / Redo",
    },
];

/// Compare view key bindings for help display
pub const COMPARE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "Ctrl+d/u",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "n/N",
        description: "Next/previous change",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_INSERT: KeyHint = KeyHint {
    key: "i",
    label: "Edit",
    color: Color::Green,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "A/B",
    color: Color::Blue,
};
pub const HINT_COMPARE: KeyHint = KeyHint {
    key: "c",
    label: "Compare",
    color: Color::Yellow,
};
pub const HINT_SWAP: KeyHint = KeyHint {
    key: "s",
    label: "Swap",
    color: Color::Magenta,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "D",
    label: "Clear",
    color: Color::Red,
};
pub const HINT_PRETTY: KeyHint = KeyHint {
    key: "f",
    label: "Pretty",
    color: Color::Cyan,
};
pub const HINT_MINIFY: KeyHint = KeyHint {
    key: "m",
    label: "Minify",
    color: Color::Cyan,
};
pub const HINT_THEME: KeyHint = KeyHint {
    key: "t",
    label: "Theme",
    color: Color::Gray,
};
pub const HINT_DONE: KeyHint = KeyHint {
    key: "Esc",
    label: "Done",
    color: Color::Green,
};
pub const HINT_NEXT_CHANGE: KeyHint = KeyHint {
    key: "n/N",
    label: "Change",
    color: Color::Yellow,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Blue,
};

/// Editor view hints (normal mode)
pub const EDITOR_HINTS: &[KeyHint] = &[
    HINT_INSERT,
    HINT_SWITCH,
    HINT_COMPARE,
    HINT_SWAP,
    HINT_CLEAR,
    HINT_PRETTY,
    HINT_MINIFY,
    HINT_THEME,
    HINT_HELP,
    HINT_QUIT,
];

/// Editor view hints (insert mode)
pub const INSERT_HINTS: &[KeyHint] = &[HINT_DONE];

/// Compare view hints
pub const COMPARE_HINTS: &[KeyHint] = &[
    HINT_SCROLL,
    HINT_NEXT_CHANGE,
    HINT_THEME,
    HINT_HELP,
    HINT_BACK,
];

/// Help view hints
pub const HELP_HINTS: &[KeyHint] = &[HINT_BACK];

/// Hints for the current view and editor mode
pub fn current_hints(view: View, mode: EditorMode) -> &'static [KeyHint] {
    match (view, mode) {
        (View::Editor, EditorMode::Insert) => INSERT_HINTS,
        (View::Editor, EditorMode::Normal) => EDITOR_HINTS,
        (View::Compare, _) => COMPARE_HINTS,
        (View::Help, _) => HELP_HINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_quit() {
        assert!(is_force_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_force_quit(&KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_half_page_keys() {
        assert!(is_half_page_down(&KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert!(is_half_page_down(&KeyEvent::from(KeyCode::PageDown)));
        assert!(!is_half_page_down(&KeyEvent::from(KeyCode::Char('d'))));
        assert!(is_half_page_up(&KeyEvent::new(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL
        )));
        assert!(is_half_page_up(&KeyEvent::from(KeyCode::PageUp)));
    }

    #[test]
    fn test_move_keys() {
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_down(KeyCode::Char('j')));
        assert!(!is_move_down(KeyCode::Char('k')));
    }

    #[test]
    fn test_current_hints_per_view() {
        assert_eq!(current_hints(View::Editor, EditorMode::Insert).len(), 1);
        assert!(
            current_hints(View::Editor, EditorMode::Normal)
                .iter()
                .any(|h| h.label == "Compare")
        );
        assert!(
            current_hints(View::Compare, EditorMode::Normal)
                .iter()
                .any(|h| h.label == "Back")
        );
    }

    #[test]
    fn test_no_duplicate_editor_keys() {
        let editor_codes = [INSERT, SWITCH_PANE, COMPARE, SWAP, CLEAR, PRETTY, MINIFY];
        let globals = [QUIT, HELP, THEME];
        for code in editor_codes {
            assert!(!globals.contains(&code));
        }
    }
}
