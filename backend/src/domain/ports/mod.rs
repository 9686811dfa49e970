//! Domain ports: the edges the store drives.
//!
//! Both ports are synchronous. The store calls them while holding its own
//! state, so adapters must not call back into the store.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_slot;
mod notifier;

#[cfg(test)]
pub use identity_slot::MockIdentitySlot;
pub use identity_slot::{IdentitySlot, IdentitySlotError, MemoryIdentitySlot};
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{NoOpNotifier, Notifier};
