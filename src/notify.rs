//! User-facing notifications.
//!
//! Screens report success and failure through a [`Notifier`]. The terminal
//! client prints them; tests record them.

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;
use tracing::debug;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier {}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        debug!(kind = ?notification.kind, text = %notification.message, "notification");
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", notification).ok();
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
