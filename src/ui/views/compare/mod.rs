//! Compare View
//!
//! Side-by-side result of comparing Text A with Text B.

mod input;
mod render;

use crate::model::Comparison;

/// Action returned by CompareView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAction {
    /// No action needed
    None,
    /// Return to the editor
    Back,
}

/// Compare view state
#[derive(Debug)]
pub struct CompareView {
    /// Result being displayed
    pub comparison: Comparison,
    /// Scroll offset (row index)
    pub scroll_offset: usize,
    /// Rows where a run of changes starts
    pub change_positions: Vec<usize>,
    /// Change run the view is at (for context bar)
    pub current_change_index: usize,
    /// Last known visible height (updated on key handling)
    visible_height: usize,
}

impl CompareView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    /// Create a view for a finished comparison
    pub fn new(comparison: Comparison) -> Self {
        let change_positions = comparison.change_positions();
        Self {
            comparison,
            scroll_offset: 0,
            change_positions,
            current_change_index: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Total number of rows
    pub fn total_rows(&self) -> usize {
        self.comparison.rows.len()
    }

    /// Number of change runs
    pub fn change_count(&self) -> usize {
        self.change_positions.len()
    }

    /// Get current context string for status bar
    pub fn current_context(&self) -> String {
        if self.change_count() > 0 {
            format!(
                "change {}/{}",
                self.current_change_index + 1,
                self.change_count()
            )
        } else {
            "(no changes)".to_string()
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Scroll up by one row
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.update_current_change_index();
    }

    /// Scroll down by one row
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
        self.update_current_change_index();
    }

    /// Calculate maximum scroll offset based on visible height
    fn max_scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        self.total_rows().saturating_sub(self.visible_height)
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height / 2);
        self.update_current_change_index();
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        let max_offset = self.max_scroll_offset();
        self.scroll_offset = (self.scroll_offset + visible_height / 2).min(max_offset);
        self.update_current_change_index();
    }

    /// Jump to the top
    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
        self.current_change_index = 0;
    }

    /// Jump to the bottom
    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.scroll_offset = self.max_scroll_offset();
        self.update_current_change_index();
    }

    /// Jump to the next change run, wrapping to the first
    pub fn next_change(&mut self) {
        let next = self
            .change_positions
            .iter()
            .position(|&pos| pos > self.scroll_offset)
            .or(if self.change_positions.is_empty() {
                None
            } else {
                Some(0)
            });
        if let Some(i) = next {
            self.scroll_offset = self.change_positions[i];
            self.current_change_index = i;
        }
    }

    /// Jump to the previous change run, wrapping to the last
    pub fn prev_change(&mut self) {
        let prev = self
            .change_positions
            .iter()
            .rposition(|&pos| pos < self.scroll_offset)
            .or(self.change_positions.len().checked_sub(1));
        if let Some(i) = prev {
            self.scroll_offset = self.change_positions[i];
            self.current_change_index = i;
        }
    }

    /// Update current_change_index based on scroll position
    fn update_current_change_index(&mut self) {
        self.current_change_index = self
            .change_positions
            .iter()
            .rposition(|&pos| pos <= self.scroll_offset)
            .unwrap_or(0);
    }
}
