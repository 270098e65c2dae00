//! Diff engine
//!
//! Two LCS passes over plain text:
//! - [`diff_lines`]: line alignment, with adjacent removals and additions
//!   paired into changes
//! - [`diff_tokens`]: token alignment inside one pair of lines
//!
//! Everything here is a pure function of its inputs. Nothing is cached
//! between calls and nothing can fail.

mod lcs;
mod line;
pub mod markup;
mod token;
mod tokenizer;

pub use line::{LineOp, diff_lines, split_lines};
pub use markup::Side;
pub use token::{AnnotatedLine, Mark, Segment, TokenDiff, diff_tokens};
pub use tokenizer::{Token, TokenKind, tokenize};
