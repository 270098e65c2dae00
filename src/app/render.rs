//! Rendering logic for the application

use ratatui::{
    Frame,
    prelude::*,
    text::Span,
    widgets::Block,
};

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::{
    components,
    theme::Palette,
    views::EditorMode,
    widgets::{render_error_banner, render_help_panel, render_status_bar},
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.last_frame_height.set(area.height);

        let palette = self.theme.palette();
        frame.render_widget(Block::default().style(palette.base_style()), area);

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        // Reserve space for status bar at bottom
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::Editor => self
                .editor_view
                .render(frame, main_area, palette, notification),
            View::Compare => self.render_compare_view(frame, main_area, palette, notification),
            View::Help => render_help_panel(frame, main_area, self.help_scroll, palette),
        }

        let hints = keys::current_hints(self.current_view, self.editor_view.mode);
        render_status_bar(frame, self.status_prefix(), hints);

        // Errors are always shown prominently
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }

    fn render_compare_view(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        notification: Option<&Notification>,
    ) {
        if let Some(ref compare_view) = self.compare_view {
            compare_view.render(frame, area, palette, notification);
        } else {
            let empty = components::empty_state("No comparison yet", Some("Press q, then c"))
                .block(components::themed_block(Line::from(" Compare "), palette));
            frame.render_widget(empty, area);
        }
    }

    /// Context shown left of the key hints
    fn status_prefix(&self) -> Vec<Span<'static>> {
        match self.current_view {
            View::Editor => {
                let (mode, color) = match self.editor_view.mode {
                    EditorMode::Normal => ("NORMAL", Color::Blue),
                    EditorMode::Insert => ("INSERT", Color::Green),
                };
                vec![
                    Span::styled(
                        format!(" {mode} "),
                        Style::default().fg(Color::Black).bg(color).bold(),
                    ),
                    Span::styled(
                        format!(" {} ", self.editor_view.focus.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                ]
            }
            View::Compare => match self.compare_view {
                Some(ref compare_view) => vec![Span::styled(
                    format!(" {} ", compare_view.current_context()),
                    Style::default().fg(Color::Cyan),
                )],
                None => Vec::new(),
            },
            View::Help => Vec::new(),
        }
    }
}
