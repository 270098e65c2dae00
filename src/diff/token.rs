//! Token-level diff for one pair of lines
//!
//! Whitespace is carried through verbatim but never aligned, so changes in
//! indentation or spacing alone do not show up as differences.

use super::lcs::{self, Step};
use super::markup::{self, Side};
use super::tokenizer::{Token, tokenize};

/// How a segment of an annotated line relates to the other side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Whitespace, never highlighted
    Neutral,
    /// Token present in the common alignment
    Matched,
    /// Token only present on this side
    Unmatched,
}

/// A run of source text with its mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub mark: Mark,
}

/// One side of a token diff: the original line split into marked segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedLine {
    pub segments: Vec<Segment>,
}

impl AnnotatedLine {
    /// Reassemble the original line
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if any token is side-specific
    pub fn has_unmatched(&self) -> bool {
        self.segments.iter().any(|s| s.mark == Mark::Unmatched)
    }

    /// Iterate over the side-specific token texts
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|s| s.mark == Mark::Unmatched)
            .map(|s| s.text.as_str())
    }
}

/// Result of diffing a pair of lines token by token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDiff {
    /// First line, unmatched tokens are removals
    pub a: AnnotatedLine,
    /// Second line, unmatched tokens are additions
    pub b: AnnotatedLine,
    /// The two rendered sides differ
    pub changed: bool,
}

impl TokenDiff {
    /// First side rendered as markup
    pub fn annotated_a(&self) -> String {
        markup::annotated_html(&self.a, Side::Left)
    }

    /// Second side rendered as markup
    pub fn annotated_b(&self) -> String {
        markup::annotated_html(&self.b, Side::Right)
    }
}

/// Diff two lines token by token.
///
/// Either side may be empty, which marks every token of the other side
/// as unmatched.
pub fn diff_tokens(a_line: &str, b_line: &str) -> TokenDiff {
    let a_tokens = tokenize(a_line);
    let b_tokens = tokenize(b_line);
    let (a_matched, b_matched) = match_tokens(&a_tokens, &b_tokens);

    let mut diff = TokenDiff {
        a: annotate(&a_tokens, &a_matched),
        b: annotate(&b_tokens, &b_matched),
        changed: false,
    };
    diff.changed = diff.annotated_a() != diff.annotated_b();
    diff
}

/// Align the significant tokens of both sides.
///
/// Returns, per side, a flag for every original token index telling whether
/// it takes part in the alignment.
fn match_tokens(a: &[Token<'_>], b: &[Token<'_>]) -> (Vec<bool>, Vec<bool>) {
    let a_significant = significant(a);
    let b_significant = significant(b);

    let a_texts: Vec<&str> = a_significant.iter().map(|&i| a[i].text).collect();
    let b_texts: Vec<&str> = b_significant.iter().map(|&i| b[i].text).collect();

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    for step in lcs::edit_script(&a_texts, &b_texts) {
        if let Step::Keep { a, b } = step {
            a_matched[a_significant[a]] = true;
            b_matched[b_significant[b]] = true;
        }
    }

    (a_matched, b_matched)
}

/// Original indices of the non-whitespace tokens
fn significant(tokens: &[Token<'_>]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.kind.is_whitespace())
        .map(|(i, _)| i)
        .collect()
}

fn annotate(tokens: &[Token<'_>], matched: &[bool]) -> AnnotatedLine {
    let segments = tokens
        .iter()
        .zip(matched)
        .map(|(token, &is_matched)| {
            let mark = if token.kind.is_whitespace() {
                Mark::Neutral
            } else if is_matched {
                Mark::Matched
            } else {
                Mark::Unmatched
            };
            Segment {
                text: token.text.to_string(),
                mark,
            }
        })
        .collect();

    AnnotatedLine { segments }
}
