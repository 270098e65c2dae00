//! UI layer
//!
//! Contains views, widgets, components, and theme definitions.

pub mod components;
pub mod theme;
pub mod views;
pub mod widgets;
