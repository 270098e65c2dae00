//! Rendering for CompareView

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::diff::{Mark, Side};
use crate::model::{Cell, Notification, Row, RowKind};
use crate::ui::{components, theme::Palette};

use super::CompareView;

/// Header rows: top border + summary line
const HEADER_HEIGHT: u16 = 2;

/// Borders around each column
const COLUMN_CHROME: u16 = 2;

impl CompareView {
    /// Rows that fit in a compare area of the given height
    pub fn visible_rows(area_height: u16) -> usize {
        area_height.saturating_sub(HEADER_HEIGHT + COLUMN_CHROME) as usize
    }

    /// Render the compare view (without status bar - rendered by App)
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        notification: Option<&Notification>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT.min(area.height)),
            Constraint::Min(1),
        ])
        .split(area);

        self.render_header(frame, chunks[0], palette, notification);

        if self.total_rows() == 0 {
            let empty = components::nothing_to_compare_state()
                .block(components::themed_block(Line::default(), palette));
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_column(frame, columns[0], Side::Left, palette);
        self.render_column(frame, columns[1], Side::Right, palette);
    }

    /// Render the header (verdict + statistics)
    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        notification: Option<&Notification>,
    ) {
        let title = Line::from(" jt-compare - Compare ")
            .bold()
            .fg(palette.title)
            .centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let verdict_color = if self.comparison.is_identical() {
            palette.added
        } else {
            palette.removed
        };
        let summary = Line::from(vec![
            Span::styled(
                format!(" {} ", self.comparison.summary()),
                Style::default().fg(verdict_color).bold(),
            ),
            Span::styled(
                self.comparison.stats_label(),
                Style::default().fg(palette.muted),
            ),
        ]);

        let block = match notif_line {
            Some(notif) => components::header_block(title).title(notif.right_aligned()),
            None => components::header_block(title),
        }
        .border_style(Style::default().fg(palette.border));

        frame.render_widget(Paragraph::new(summary).block(block), area);
    }

    /// Render one side of the comparison (scrollable)
    fn render_column(&self, frame: &mut Frame, area: Rect, side: Side, palette: &Palette) {
        let inner_height = area.height.saturating_sub(COLUMN_CHROME) as usize;
        let gutter = self.gutter_width(side);

        let lines: Vec<Line> = self
            .comparison
            .rows
            .iter()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|row| render_cell(row, side, gutter, palette))
            .collect();

        let title = Line::from(format!(" {} ", side.label())).bold();
        let block = components::pane_block(title, palette, false);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Width of the line number column for a side
    fn gutter_width(&self, side: Side) -> usize {
        let max = self
            .comparison
            .rows
            .iter()
            .filter_map(|row| row.line_number(side))
            .max()
            .unwrap_or(0);
        max.to_string().len().max(2)
    }
}

/// Render a single row for one side
fn render_cell(row: &Row, side: Side, gutter: usize, palette: &Palette) -> Line<'static> {
    let number = match row.line_number(side) {
        Some(n) => format!("{n:>gutter$} "),
        None => " ".repeat(gutter + 1),
    };
    let mut spans = vec![Span::styled(number, Style::default().fg(palette.line_number))];

    match row.cell(side) {
        Cell::Plain(text) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(text.clone(), Style::default().fg(palette.text)));
        }
        Cell::Annotated(line) => {
            let line_color = palette.changed_line(side);
            let marker = match (row.kind, side) {
                (RowKind::Equal, _) => "  ",
                (_, Side::Left) => "- ",
                (_, Side::Right) => "+ ",
            };
            spans.push(Span::styled(marker, Style::default().fg(line_color)));
            spans.extend(line.segments.iter().map(|segment| {
                let style = match segment.mark {
                    Mark::Unmatched => palette.unmatched_token(side),
                    Mark::Neutral | Mark::Matched => Style::default().fg(line_color),
                };
                Span::styled(segment.text.clone(), style)
            }));
        }
        Cell::Gap => {
            spans.push(Span::styled("~", Style::default().fg(palette.gap)));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compare;
    use crate::ui::theme::ThemeKind;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(CompareView::visible_rows(24), 20);
        assert_eq!(CompareView::visible_rows(3), 0);
    }

    #[test]
    fn test_render_cell_equal_and_gap() {
        let palette = ThemeKind::Dark.palette();
        let cmp = compare("x\ny", "x");
        assert_eq!(plain(&render_cell(&cmp.rows[0], Side::Left, 2, palette)), " 1   x");
        assert_eq!(plain(&render_cell(&cmp.rows[1], Side::Left, 2, palette)), " 2 - y");
        assert_eq!(plain(&render_cell(&cmp.rows[1], Side::Right, 2, palette)), "   ~");
    }

    #[test]
    fn test_render_cell_highlights_unmatched_tokens() {
        let palette = ThemeKind::Dark.palette();
        let cmp = compare(r#"{"a":1}"#, r#"{"a":2}"#);
        let line = render_cell(&cmp.rows[0], Side::Right, 2, palette);
        assert_eq!(plain(&line), r#" 1 + {"a":2}"#);

        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(palette.added_token_bg))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec!["2"]);
    }

    #[test]
    fn test_gutter_width_grows_with_line_count() {
        let long: String = (0..120).map(|i| format!("{i}\n")).collect();
        let view = CompareView::new(compare(&long, "0"));
        assert_eq!(view.gutter_width(Side::Left), 3);
        assert_eq!(view.gutter_width(Side::Right), 2);
    }
}
