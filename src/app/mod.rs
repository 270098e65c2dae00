//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `actions`: Compare, swap, clear and formatting
//! - `render`: UI rendering

mod actions;
mod input;
mod render;
mod state;

pub use state::{App, View};
