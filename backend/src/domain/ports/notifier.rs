//! Port for surfacing notifications to whoever is watching the store.

use crate::domain::Notification;

/// Receives every notification the store emits.
///
/// Delivery is fire-and-forget: implementations must not block and have no
/// way to report failure back to the store.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Deliver a single notification.
    fn notify(&self, notification: Notification);
}

/// Notifier that drops everything it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: Notification) {}
}
