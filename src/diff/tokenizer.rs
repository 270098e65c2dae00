//! Lexical scanner for the token pass
//!
//! Splits a line into JSON-aware tokens. The scanner is total: every
//! character of the input belongs to exactly one token, so joining the
//! tokens gives back the original line.

use std::sync::LazyLock;

use regex::Regex;

/// Token pattern, alternatives tried left to right at each position.
///
/// The last two alternatives (`\s+` and `\S`) cover every character, which
/// is what makes the scan gap-free.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xs)
        (?P<string>"(?:\\.|[^"\\])*")
        | (?P<keyword>\b(?:true|false|null)\b)
        | (?P<number>-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?)
        | (?P<punct>[{}\[\]:,])
        | (?P<ws>\s+)
        | (?P<other>\S)
        "#,
    )
    .expect("Invalid token regex")
});

/// Kind of a lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Double-quoted string literal, escapes included
    String,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// Numeric literal (sign, fraction and exponent optional)
    Number,
    /// One of `{ } [ ] : ,`
    Punctuation,
    /// Maximal run of whitespace
    Whitespace,
    /// Any other single character
    Other,
}

impl TokenKind {
    /// Whitespace is kept in the output but never takes part in matching
    pub fn is_whitespace(self) -> bool {
        self == Self::Whitespace
    }
}

/// A token borrowed from the scanned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Scan a line into tokens
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    TOKEN_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            let (name, text) = ["string", "keyword", "number", "punct", "ws", "other"]
                .into_iter()
                .find_map(|name| caps.name(name).map(|m| (name, m.as_str())))?;

            let kind = match name {
                "string" => TokenKind::String,
                "keyword" if text == "null" => TokenKind::Null,
                "keyword" => TokenKind::Boolean,
                "number" => TokenKind::Number,
                "punct" => TokenKind::Punctuation,
                "ws" => TokenKind::Whitespace,
                _ => TokenKind::Other,
            };
            Some(Token { text, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line).into_iter().map(|t| t.text).collect()
    }

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize(line).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_object() {
        assert_eq!(
            texts(r#"{"id":1,"name":"Alice"}"#),
            vec!["{", r#""id""#, ":", "1", ",", r#""name""#, ":", r#""Alice""#, "}"]
        );
    }

    #[test]
    fn test_tokenize_kinds() {
        use TokenKind::*;
        assert_eq!(
            kinds(r#"[true, null, -1.5e3, "x"]"#),
            vec![
                Punctuation,
                Boolean,
                Punctuation,
                Whitespace,
                Null,
                Punctuation,
                Whitespace,
                Number,
                Punctuation,
                Whitespace,
                String,
                Punctuation,
            ]
        );
    }

    #[test]
    fn test_tokenize_escaped_quote_stays_in_string() {
        assert_eq!(
            texts(r#""say \"hi\"" x"#),
            vec![r#""say \"hi\"""#, " ", "x"]
        );
    }

    #[test]
    fn test_tokenize_unterminated_string_falls_back() {
        assert_eq!(texts(r#""abc"#), vec!["\"", "a", "b", "c"]);
        assert_eq!(kinds("\"")[0], TokenKind::Other);
    }

    #[test]
    fn test_tokenize_keyword_needs_word_boundary() {
        assert_eq!(texts("trueish"), vec!["t", "r", "u", "e", "i", "s", "h"]);
        assert_eq!(kinds("false"), vec![TokenKind::Boolean]);
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        assert_eq!(texts("  a \t b"), vec!["  ", "a", " \t ", "b"]);
        assert_eq!(kinds("   "), vec![TokenKind::Whitespace]);
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(texts("-0.25"), vec!["-0.25"]);
        assert_eq!(texts("1E+10"), vec!["1E+10"]);
        assert_eq!(texts("- 3"), vec!["-", " ", "3"]);
        assert_eq!(texts("1.x"), vec!["1", ".", "x"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_is_lossless() {
        for line in [
            r#"  "key": [1, 2, {"nested": null}],"#,
            "}}]]::,,",
            r#""unbalanced \" quote"#,
            "ünïcödé → ✓",
            "\t\t",
        ] {
            assert_eq!(texts(line).concat(), line);
        }
    }
}
