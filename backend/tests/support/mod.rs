//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use resource_desk::domain::ports::{MemoryIdentitySlot, Notifier};
use resource_desk::domain::{Notification, ResourceStore, StoreDependencies};
use resource_desk::outbound::seed::builtin_tables;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Notifier that keeps every notification in order.
#[derive(Default)]
pub struct Recorder(Mutex<Vec<Notification>>);

impl Recorder {
    pub fn titles(&self) -> Vec<String> {
        self.0
            .lock()
            .expect("recorder lock")
            .iter()
            .map(|n| n.title().to_owned())
            .collect()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.0.lock().expect("recorder lock").push(notification);
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

/// Store over the built-in demo data with recording collaborators.
pub fn demo_store() -> (ResourceStore, Arc<Recorder>, Arc<MemoryIdentitySlot>) {
    let recorder = Arc::new(Recorder::default());
    let slot = Arc::new(MemoryIdentitySlot::default());
    let store = ResourceStore::new(
        builtin_tables().expect("built-in seed maps"),
        StoreDependencies {
            clock: Arc::new(FixedClock(fixed_instant())),
            notifier: recorder.clone(),
            identity_slot: slot.clone(),
        },
    );
    (store, recorder, slot)
}
