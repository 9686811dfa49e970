//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data`. The store is
//! synchronous and single-writer, so every handler takes the lock, runs one
//! store operation to completion, and releases it before responding.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Error, Notification, ResourceStore};
use crate::outbound::notifications::NotificationFeed;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    store: Arc<Mutex<ResourceStore>>,
    feed: Arc<NotificationFeed>,
}

impl HttpState {
    /// Wrap a store and the feed its notifier writes to.
    pub fn new(store: ResourceStore, feed: Arc<NotificationFeed>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            feed,
        }
    }

    /// Run a read-only closure against the store.
    pub fn read<T>(&self, f: impl FnOnce(&ResourceStore) -> T) -> Result<T, Error> {
        let store = self.lock()?;
        Ok(f(&store))
    }

    /// Run a mutating closure against the store.
    pub fn write<T>(&self, f: impl FnOnce(&mut ResourceStore) -> T) -> Result<T, Error> {
        let mut store = self.lock()?;
        Ok(f(&mut store))
    }

    /// Notifications retained by the feed, oldest first.
    pub fn recent_notifications(&self) -> Vec<Notification> {
        self.feed.recent()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ResourceStore>, Error> {
        self.store
            .lock()
            .map_err(|_| Error::internal("resource store lock poisoned"))
    }
}
