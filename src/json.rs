//! JSON formatting for editor buffers
//!
//! Pretty-print or minify a buffer before comparing, so that two documents
//! with different layouts can be lined up. Member order is preserved.

use serde_json::Value;
use thiserror::Error;

/// Output layout for [`format_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indentation, one member per line
    Pretty,
    /// No insignificant whitespace
    Minify,
}

impl JsonStyle {
    /// Message shown after a successful format
    pub fn done_message(self) -> &'static str {
        match self {
            Self::Pretty => "Formatted ✓",
            Self::Minify => "Minified ✓",
        }
    }
}

/// Errors that can occur when formatting JSON
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("{label} is empty")]
    Empty { label: String },

    #[error("{label}: Invalid JSON: {source}")]
    Parse {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl JsonError {
    /// 1-based (line, column) of a parse error
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Parse { source, .. } => Some((source.line(), source.column())),
            _ => None,
        }
    }
}

/// Parse `text` as JSON and re-serialize it in the given style.
///
/// `label` names the input in error messages (e.g. "Text A").
pub fn format_json(text: &str, style: JsonStyle, label: &str) -> Result<String, JsonError> {
    if text.trim().is_empty() {
        return Err(JsonError::Empty {
            label: label.to_string(),
        });
    }

    let value: Value = serde_json::from_str(text).map_err(|source| JsonError::Parse {
        label: label.to_string(),
        source,
    })?;

    let formatted = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value)?,
        JsonStyle::Minify => serde_json::to_string(&value)?,
    };
    Ok(formatted)
}
