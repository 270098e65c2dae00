//! View components
//!
//! Each view represents a screen in the application.

mod compare;
mod editor;

pub use compare::{CompareAction, CompareView};
pub use editor::{EditorAction, EditorMode, EditorView};
