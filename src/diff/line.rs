//! Line-level diff
//!
//! Aligns the lines of two texts and turns the alignment into a list of
//! [`LineOp`]s, pairing adjacent removals and additions into changes.

use super::lcs::{self, Step};

/// A single line-level edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp<'a> {
    /// Same line on both sides
    Equal(&'a str),
    /// Line only present in the first text
    Remove(&'a str),
    /// Line only present in the second text
    Add(&'a str),
    /// Removed line paired with the line added in its place
    Change(&'a str, &'a str),
}

impl<'a> LineOp<'a> {
    /// Line consumed from the first text, if any
    pub fn a_line(&self) -> Option<&'a str> {
        match *self {
            Self::Equal(line) | Self::Remove(line) | Self::Change(line, _) => Some(line),
            Self::Add(_) => None,
        }
    }

    /// Line consumed from the second text, if any
    pub fn b_line(&self) -> Option<&'a str> {
        match *self {
            Self::Equal(line) | Self::Add(line) | Self::Change(_, line) => Some(line),
            Self::Remove(_) => None,
        }
    }

    /// Check if this operation leaves the line untouched
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal(_))
    }
}

/// Split text into lines on `\n` or `\r\n`.
///
/// Empty text has no lines. Every terminator starts a new line, so a
/// trailing one yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Compute the line-level edit operations turning `a` into `b`.
pub fn diff_lines<'a>(a: &'a str, b: &'a str) -> Vec<LineOp<'a>> {
    let a_lines = split_lines(a);
    let b_lines = split_lines(b);

    let ops = lcs::edit_script(&a_lines, &b_lines)
        .into_iter()
        .map(|step| match step {
            Step::Keep { a, .. } => LineOp::Equal(a_lines[a]),
            Step::Delete(i) => LineOp::Remove(a_lines[i]),
            Step::Insert(j) => LineOp::Add(b_lines[j]),
        })
        .collect();

    merge_changes(ops)
}

/// Pair each removal with an addition directly next to it.
///
/// The tail-first backtrack emits a replaced line as `Add` then `Remove`,
/// so both adjacency orders are paired. Runs pair off left to right.
fn merge_changes(ops: Vec<LineOp<'_>>) -> Vec<LineOp<'_>> {
    let mut merged = Vec::with_capacity(ops.len());
    let mut iter = ops.into_iter().peekable();

    while let Some(op) = iter.next() {
        let paired = match (op, iter.peek()) {
            (LineOp::Remove(a), Some(&LineOp::Add(b))) => Some(LineOp::Change(a, b)),
            (LineOp::Add(b), Some(&LineOp::Remove(a))) => Some(LineOp::Change(a, b)),
            _ => None,
        };

        match paired {
            Some(change) => {
                iter.next();
                merged.push(change);
            }
            None => merged.push(op),
        }
    }

    merged
}
