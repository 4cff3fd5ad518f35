//! User-visible notification side channel.
//!
//! Notifications are fire-and-forget: the view emits them after a successful
//! store mutation and never reads them back.

use serde::{Deserialize, Serialize};

/// Transient message shown after a successful task mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    TaskAdded,
    TaskUpdated,
    TaskDeleted,
}

impl Notification {
    /// Human-readable toast text.
    pub fn message(self) -> &'static str {
        match self {
            Self::TaskAdded => "Task added successfully",
            Self::TaskUpdated => "Task updated successfully",
            Self::TaskDeleted => "Task deleted successfully",
        }
    }
}

/// Sink for notifications emitted by the view.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Buffers notifications until the UI drains them.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending notifications, oldest first.
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}
