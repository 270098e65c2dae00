//! jt-compare - side-by-side JSON/Text comparison
//!
//! Compares two texts line by line with an LCS diff, then highlights the
//! differing tokens inside each changed line.
//!
//! This library provides:
//! - [`diff`]: Line and token diff engine
//! - [`model`]: Comparison results and notifications
//! - [`json`]: JSON pretty-print and minify
//! - [`cli`]: Command-line arguments, input loading and reports
//! - [`logging`]: File logging setup
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod diff;
pub mod json;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
