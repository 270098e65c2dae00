//! Block components for UI rendering
//!
//! Common block patterns used across views.

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme::Palette;

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a block with top, left, and right borders (for header sections)
pub fn header_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::TOP | Borders::LEFT | Borders::RIGHT)
}

/// Bordered block for one side of the screen, colored by focus
pub fn pane_block<'a>(title: Line<'a>, palette: &Palette, focused: bool) -> Block<'a> {
    bordered_block(title).border_style(palette.border_style(focused))
}

/// Bordered block styled with the palette's text color
pub fn themed_block<'a>(title: Line<'a>, palette: &Palette) -> Block<'a> {
    bordered_block(title)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().fg(palette.text))
}
