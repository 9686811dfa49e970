//! Tracing-backed notification feed.
//!
//! Every notification is logged at `info` (or `warn` when destructive) and
//! kept in a bounded ring buffer so HTTP clients can poll the most recent
//! ones. Once the buffer is full the oldest entry is dropped.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::domain::ports::Notifier;
use crate::domain::{Notification, Severity};

/// Default number of notifications retained.
pub const DEFAULT_FEED_CAPACITY: usize = 50;

/// Notifier that logs and remembers recent notifications.
#[derive(Debug)]
pub struct NotificationFeed {
    capacity: usize,
    entries: Mutex<VecDeque<Notification>>,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_FEED_CAPACITY)
    }
}

impl NotificationFeed {
    /// Feed keeping at most `capacity` notifications. Zero keeps none.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Retained notifications, oldest first.
    pub fn recent(&self) -> Vec<Notification> {
        self.entries().iter().cloned().collect()
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Notifier for NotificationFeed {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Info => info!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
            Severity::Destructive => warn!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
        }
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(notification);
    }
}
