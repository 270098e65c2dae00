//! Notification model
//!
//! Short-lived feedback shown in the title bar: compare verdicts,
//! formatting results, swaps.

use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - e.g. inputs identical, JSON formatted (green)
    Success,
    /// Info - informational message (cyan)
    Info,
    /// Warning - e.g. inputs differ (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Check if the notification has outlived [`NOTIFICATION_TTL`]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_kinds() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        assert_eq!(Notification::info("fyi").kind, NotificationKind::Info);
        assert_eq!(Notification::warning("hm").kind, NotificationKind::Warning);
    }

    #[test]
    fn test_notification_message() {
        let n = Notification::new(String::from("Different ✕"), NotificationKind::Warning);
        assert_eq!(n.message, "Different ✕");
    }

    #[test]
    fn test_notification_not_expired_immediately() {
        let n = Notification::success("Identical ✓");
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let n = Notification::info("Swapped");
        assert!(!n.is_expired_at(n.created_at + NOTIFICATION_TTL - Duration::from_millis(1)));
        assert!(n.is_expired_at(n.created_at + NOTIFICATION_TTL));
    }
}
