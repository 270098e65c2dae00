//! Comparison data model
//!
//! A [`Comparison`] is the side-by-side result of comparing two texts: one
//! row per line operation, token diffs already applied to the rows that
//! differ.

use crate::diff::{self, AnnotatedLine, LineOp, Side, TokenDiff, markup};

/// Verdict shown when both texts have the same lines
pub const IDENTICAL_SUMMARY: &str = "Identical ✓";
/// Verdict shown when the texts differ
pub const DIFFERENT_SUMMARY: &str = "Different ✕";

/// Type of comparison row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Same line on both sides
    Equal,
    /// Line only in the first text
    Removed,
    /// Line only in the second text
    Added,
    /// Line modified in place
    Changed,
}

impl RowKind {
    /// Class used by the HTML report for a row on the given side
    fn html_class(self, side: Side) -> &'static str {
        match (self, side) {
            (Self::Equal, _) => "diff-line",
            (Self::Removed, Side::Left) | (Self::Changed, Side::Left) => "diff-line diff-rem",
            (Self::Added, Side::Right) | (Self::Changed, Side::Right) => "diff-line diff-add",
            (Self::Removed, Side::Right) | (Self::Added, Side::Left) => "diff-line diff-gap",
        }
    }
}

/// Content of one side of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Unchanged line
    Plain(String),
    /// Line with token-level marks
    Annotated(AnnotatedLine),
    /// Nothing on this side
    Gap,
}

impl Cell {
    /// Source text of the cell (empty for gaps)
    pub fn text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Annotated(line) => line.plain(),
            Self::Gap => String::new(),
        }
    }

    fn html(&self, side: Side) -> String {
        match self {
            Self::Plain(text) => markup::escape_html(text),
            Self::Annotated(line) => markup::annotated_html(line, side),
            Self::Gap => String::new(),
        }
    }
}

/// A single side-by-side row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Type of this row
    pub kind: RowKind,
    /// Content from the first text
    pub left: Cell,
    /// Content from the second text
    pub right: Cell,
    /// 1-based line numbers (left, right) - None on the gap side
    pub line_numbers: (Option<usize>, Option<usize>),
}

impl Row {
    /// Cell for the given side
    pub fn cell(&self, side: Side) -> &Cell {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Line number for the given side
    pub fn line_number(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.line_numbers.0,
            Side::Right => self.line_numbers.1,
        }
    }
}

/// Row counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub equal: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffStats {
    /// Number of rows that are not equal
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.changed
    }

    fn record(&mut self, kind: RowKind) {
        match kind {
            RowKind::Equal => self.equal += 1,
            RowKind::Added => self.added += 1,
            RowKind::Removed => self.removed += 1,
            RowKind::Changed => self.changed += 1,
        }
    }
}

/// Side-by-side comparison of two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub rows: Vec<Row>,
    pub stats: DiffStats,
}

impl Comparison {
    /// Check if both texts have the same lines
    pub fn is_identical(&self) -> bool {
        self.stats.total_changes() == 0
    }

    /// Verdict line for the summary area
    pub fn summary(&self) -> &'static str {
        if self.is_identical() {
            IDENTICAL_SUMMARY
        } else {
            DIFFERENT_SUMMARY
        }
    }

    /// Short statistics string, e.g. `+1 -2 ~3`
    pub fn stats_label(&self) -> String {
        format!(
            "+{} -{} ~{}",
            self.stats.added, self.stats.removed, self.stats.changed
        )
    }

    /// Row indices where a run of non-equal rows starts
    pub fn change_positions(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, row)| {
                row.kind != RowKind::Equal
                    && (*i == 0 || self.rows[i - 1].kind == RowKind::Equal)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Plain-text report: `  ` equal, `- ` removed, `+ ` added.
    ///
    /// A changed row prints as its removal followed by its addition.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            match row.kind {
                RowKind::Equal => push_text_line(&mut out, "  ", &row.left.text()),
                RowKind::Removed => push_text_line(&mut out, "- ", &row.left.text()),
                RowKind::Added => push_text_line(&mut out, "+ ", &row.right.text()),
                RowKind::Changed => {
                    push_text_line(&mut out, "- ", &row.left.text());
                    push_text_line(&mut out, "+ ", &row.right.text());
                }
            }
        }
        out
    }

    /// HTML rows for each side as `(left, right)`
    pub fn to_html(&self) -> (String, String) {
        let render_side = |side: Side| -> String {
            self.rows
                .iter()
                .map(|row| {
                    format!(
                        "<div class=\"{}\">{}</div>",
                        row.kind.html_class(side),
                        row.cell(side).html(side)
                    )
                })
                .collect()
        };
        (render_side(Side::Left), render_side(Side::Right))
    }
}

fn push_text_line(out: &mut String, prefix: &str, text: &str) {
    out.push_str(prefix);
    out.push_str(text);
    out.push('\n');
}

/// Compare two texts line by line, then token by token inside the lines
/// that differ.
pub fn compare(a: &str, b: &str) -> Comparison {
    let mut comparison = Comparison::default();
    let (mut left_no, mut right_no) = (0, 0);

    for op in diff::diff_lines(a, b) {
        let row = match op {
            LineOp::Equal(line) => {
                left_no += 1;
                right_no += 1;
                Row {
                    kind: RowKind::Equal,
                    left: Cell::Plain(line.to_string()),
                    right: Cell::Plain(line.to_string()),
                    line_numbers: (Some(left_no), Some(right_no)),
                }
            }
            LineOp::Remove(line) => {
                left_no += 1;
                let TokenDiff { a, .. } = diff::diff_tokens(line, "");
                Row {
                    kind: RowKind::Removed,
                    left: Cell::Annotated(a),
                    right: Cell::Gap,
                    line_numbers: (Some(left_no), None),
                }
            }
            LineOp::Add(line) => {
                right_no += 1;
                let TokenDiff { b, .. } = diff::diff_tokens("", line);
                Row {
                    kind: RowKind::Added,
                    left: Cell::Gap,
                    right: Cell::Annotated(b),
                    line_numbers: (None, Some(right_no)),
                }
            }
            LineOp::Change(a_line, b_line) => {
                left_no += 1;
                right_no += 1;
                let TokenDiff { a, b, .. } = diff::diff_tokens(a_line, b_line);
                Row {
                    kind: RowKind::Changed,
                    left: Cell::Annotated(a),
                    right: Cell::Annotated(b),
                    line_numbers: (Some(left_no), Some(right_no)),
                }
            }
        };
        comparison.stats.record(row.kind);
        comparison.rows.push(row);
    }

    tracing::debug!(
        rows = comparison.rows.len(),
        added = comparison.stats.added,
        removed = comparison.stats.removed,
        changed = comparison.stats.changed,
        "compared inputs"
    );

    comparison
}
