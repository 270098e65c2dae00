//! Color theme definitions
//!
//! Two palettes, dark and light. The active one is switched at runtime
//! with the theme key and is not persisted.

use ratatui::style::{Color, Modifier, Style};

use crate::diff::Side;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Colors for this theme
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

/// Colors used across views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Regular text
    pub text: Color,
    /// Secondary text (hints, placeholders)
    pub muted: Color,
    /// Unfocused border
    pub border: Color,
    /// Focused editor border
    pub focused_border: Color,
    /// View titles
    pub title: Color,
    /// Line number gutter
    pub line_number: Color,
    /// Removed line text
    pub removed: Color,
    /// Added line text
    pub added: Color,
    /// Background of tokens only in Text A
    pub removed_token_bg: Color,
    /// Background of tokens only in Text B
    pub added_token_bg: Color,
    /// Foreground on highlighted tokens
    pub token_fg: Color,
    /// Filler for the missing side of a row
    pub gap: Color,
}

/// Dark palette (default)
pub const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::Reset,
    muted: Color::DarkGray,
    border: Color::DarkGray,
    focused_border: Color::Cyan,
    title: Color::White,
    line_number: Color::DarkGray,
    removed: Color::Red,
    added: Color::Green,
    removed_token_bg: Color::Red,
    added_token_bg: Color::Green,
    token_fg: Color::Black,
    gap: Color::DarkGray,
};

/// Light palette
pub const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted: Color::Gray,
    border: Color::Gray,
    focused_border: Color::Blue,
    title: Color::Black,
    line_number: Color::Gray,
    removed: Color::Rgb(175, 0, 0),
    added: Color::Rgb(0, 120, 0),
    removed_token_bg: Color::Rgb(255, 190, 190),
    added_token_bg: Color::Rgb(190, 240, 190),
    token_fg: Color::Black,
    gap: Color::Gray,
};

impl Palette {
    /// Line color for rows that differ on the given side
    pub fn changed_line(&self, side: Side) -> Color {
        match side {
            Side::Left => self.removed,
            Side::Right => self.added,
        }
    }

    /// Style of a token that only exists on the given side
    pub fn unmatched_token(&self, side: Side) -> Style {
        let bg = match side {
            Side::Left => self.removed_token_bg,
            Side::Right => self.added_token_bg,
        };
        Style::default()
            .fg(self.token_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Base style for the whole screen
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border style for an editor pane
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focused_border)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeKind::Dark.toggle(), ThemeKind::Light);
        assert_eq!(ThemeKind::Dark.toggle().toggle(), ThemeKind::Dark);
        assert_eq!(ThemeKind::default(), ThemeKind::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeKind::Dark.palette(), ThemeKind::Light.palette());
        assert_eq!(ThemeKind::Light.label(), "light");
    }

    #[test]
    fn test_unmatched_token_per_side() {
        let palette = ThemeKind::Dark.palette();
        assert_eq!(palette.unmatched_token(Side::Left).bg, Some(Color::Red));
        assert_eq!(palette.unmatched_token(Side::Right).bg, Some(Color::Green));
        assert_eq!(palette.changed_line(Side::Right), palette.added);
    }
}
