//! Command-line interface
//!
//! Argument parsing and input loading. Paths are read here, never in the
//! diff engine.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::Level;

use crate::logging::LoggingConfig;
use crate::model::Comparison;
use crate::ui::theme::ThemeKind;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Sample pair loaded when no inputs are given
pub const SAMPLE_LEFT: &str = r#"{"id":1,"name":"Alice"}"#;
/// Sample pair loaded when no inputs are given
pub const SAMPLE_RIGHT: &str = r#"{"id":1,"name":"Alice","role":"admin"}"#;

/// Compare two JSON (or any text) documents line by line and token by token
#[derive(Debug, Parser)]
#[command(name = "jt-compare", version, about)]
pub struct Cli {
    /// First input file ("-" for stdin)
    #[arg(requires = "right")]
    pub left: Option<PathBuf>,

    /// Second input file ("-" for stdin)
    pub right: Option<PathBuf>,

    /// Where the comparison goes
    #[arg(short, long, value_enum, default_value_t = OutputMode::Tui)]
    pub output: OutputMode,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Directory for the log file (defaults to the user data directory)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging settings derived from the flags
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: if self.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
            dir: self.log_dir.clone(),
        }
    }
}

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Interactive terminal UI
    Tui,
    /// Plain text report with -/+ prefixes
    Text,
    /// HTML fragment with one column per input
    Html,
}

/// Theme flag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeKind {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeKind::Dark,
            ThemeArg::Light => ThemeKind::Light,
        }
    }
}

/// Errors that can occur while loading inputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("Standard input can only be used for one side")]
    StdinTwice,
}

/// Both texts to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub left: String,
    pub right: String,
}

impl Inputs {
    /// The built-in sample pair
    pub fn sample() -> Self {
        Self {
            left: SAMPLE_LEFT.to_string(),
            right: SAMPLE_RIGHT.to_string(),
        }
    }
}

/// Load the inputs named on the command line.
///
/// Returns `None` when no paths were given.
pub fn load_inputs(
    left: Option<&Path>,
    right: Option<&Path>,
) -> Result<Option<Inputs>, InputError> {
    let (Some(left), Some(right)) = (left, right) else {
        return Ok(None);
    };

    if is_stdin(left) && is_stdin(right) {
        return Err(InputError::StdinTwice);
    }

    let inputs = Inputs {
        left: read_input(left)?,
        right: read_input(right)?,
    };
    tracing::info!(
        left = %left.display(),
        right = %right.display(),
        left_bytes = inputs.left.len(),
        right_bytes = inputs.right.len(),
        "loaded inputs"
    );
    Ok(Some(inputs))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn read_input(path: &Path) -> Result<String, InputError> {
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(io_error)?;
        buf
    } else {
        std::fs::read(path).map_err(io_error)?
    };

    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Render a non-interactive report
pub fn render_report(comparison: &Comparison, mode: OutputMode) -> String {
    match mode {
        OutputMode::Text => comparison.to_text(),
        OutputMode::Html => {
            let (left, right) = comparison.to_html();
            format!(
                "<div class=\"diff-side\">{left}</div>\n<div class=\"diff-side\">{right}</div>\n"
            )
        }
        OutputMode::Tui => String::new(),
    }
}
