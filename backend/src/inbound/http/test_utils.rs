//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::ports::MemoryIdentitySlot;
use crate::domain::{ResourceStore, StoreDependencies};
use crate::inbound::http::state::HttpState;
use crate::outbound::notifications::NotificationFeed;
use crate::outbound::seed::builtin_tables;

/// HTTP state over the built-in demo data with an in-memory identity slot.
pub fn demo_state() -> HttpState {
    let feed = Arc::new(NotificationFeed::default());
    let store = ResourceStore::new(
        builtin_tables().expect("built-in seed maps"),
        StoreDependencies {
            clock: Arc::new(DefaultClock),
            notifier: feed.clone(),
            identity_slot: Arc::new(MemoryIdentitySlot::default()),
        },
    );
    HttpState::new(store, feed)
}
