//! Rendering for EditorView

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::diff::Side;
use crate::model::Notification;
use crate::ui::{components, theme::Palette};

use super::{EditorMode, EditorView};

impl EditorView {
    /// Render the editor (without status bar - rendered by App)
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        notification: Option<&Notification>,
    ) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        render_title_bar(frame, chunks[0], palette, notification);

        let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_pane(frame, panes[0], Side::Left, palette);
        self.render_pane(frame, panes[1], Side::Right, palette);
    }

    fn render_pane(&self, frame: &mut Frame, area: Rect, side: Side, palette: &Palette) {
        let focused = self.focus == side;
        let mut title = vec![Span::raw(format!(" {} ", side.label())).bold()];
        if focused && self.mode == EditorMode::Insert {
            title.push(Span::styled(
                "[INSERT] ",
                Style::default().fg(palette.focused_border),
            ));
        }
        let lines = Line::from(format!(" {} lines ", self.line_count(side)))
            .fg(palette.muted)
            .right_aligned();

        let block = components::pane_block(Line::from(title), palette, focused).title(lines);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(self.textarea(side), inner);
    }
}

/// One-line title bar with the app name and the latest notification
fn render_title_bar(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    notification: Option<&Notification>,
) {
    let title = Line::from(" jt-compare - JSON/Text Compare ")
        .bold()
        .fg(palette.title)
        .centered();

    let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
    let notif_line = notification
        .filter(|n| !n.is_expired())
        .map(|n| components::build_notification_title(n, Some(available_for_notif)))
        .filter(|line| !line.spans.is_empty());

    let block = match notif_line {
        Some(notif) => components::header_block(title).title(notif.right_aligned()),
        None => components::header_block(title),
    }
    .border_style(Style::default().fg(palette.border));

    frame.render_widget(block, area);
}
