//! Data models for jt-compare
//!
//! UI-independent structures: the side-by-side comparison built on top of
//! the diff engine, and user-facing notifications.

mod comparison;
mod notification;

pub use comparison::{
    Cell, Comparison, DIFFERENT_SUMMARY, DiffStats, IDENTICAL_SUMMARY, Row, RowKind, compare,
};
pub use notification::{Notification, NotificationKind};
