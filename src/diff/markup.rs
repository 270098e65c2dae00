//! HTML markup for annotated lines
//!
//! Matched tokens become plain `<span>`s, side-specific tokens get a class
//! per side, whitespace is written out verbatim. `&`, `<` and `>` are
//! escaped so the result can be dropped into a page as-is.

use super::token::{AnnotatedLine, Mark};

/// Which input a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// First input ("Text A")
    #[default]
    Left,
    /// Second input ("Text B")
    Right,
}

impl Side {
    /// The other side
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Class for tokens only present on this side
    pub fn token_class(self) -> &'static str {
        match self {
            Self::Left => "diff-rem-token",
            Self::Right => "diff-add-token",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Text A",
            Self::Right => "Text B",
        }
    }
}

/// Escape `&`, `<` and `>`
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one side of a token diff
pub fn annotated_html(line: &AnnotatedLine, side: Side) -> String {
    let mut html = String::new();
    for segment in &line.segments {
        let text = escape_html(&segment.text);
        match segment.mark {
            Mark::Neutral => html.push_str(&text),
            Mark::Matched => {
                html.push_str("<span>");
                html.push_str(&text);
                html.push_str("</span>");
            }
            Mark::Unmatched => {
                html.push_str("<span class=\"");
                html.push_str(side.token_class());
                html.push_str("\">");
                html.push_str(&text);
                html.push_str("</span>");
            }
        }
    }
    html
}
