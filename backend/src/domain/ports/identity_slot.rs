//! Port for the single persisted slot holding the logged-in identity.
//!
//! The slot stores an opaque string; the store owns the JSON encoding of
//! the user record it writes there.

use std::sync::Mutex;

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity slot adapters.
    pub enum IdentitySlotError {
        /// Reading or writing the backing medium failed.
        Io { message: String } => "identity slot i/o failed: {message}",
        /// The slot's lock was poisoned by a panicking writer.
        Poisoned => "identity slot lock poisoned",
    }
}

/// Persisted single-value slot.
#[cfg_attr(test, mockall::automock)]
pub trait IdentitySlot: Send + Sync {
    /// Read the slot. `Ok(None)` means nothing is stored.
    fn load(&self) -> Result<Option<String>, IdentitySlotError>;

    /// Replace the slot contents.
    fn store(&self, value: &str) -> Result<(), IdentitySlotError>;

    /// Remove the slot contents. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<(), IdentitySlotError>;
}

/// Slot kept in process memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryIdentitySlot {
    value: Mutex<Option<String>>,
}

impl MemoryIdentitySlot {
    /// Slot pre-filled with `value`, e.g. to simulate a previous session.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl IdentitySlot for MemoryIdentitySlot {
    fn load(&self) -> Result<Option<String>, IdentitySlotError> {
        let guard = self
            .value
            .lock()
            .map_err(|_| IdentitySlotError::poisoned())?;
        Ok(guard.clone())
    }

    fn store(&self, value: &str) -> Result<(), IdentitySlotError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|_| IdentitySlotError::poisoned())?;
        *guard = Some(value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentitySlotError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|_| IdentitySlotError::poisoned())?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_round_trips() {
        let slot = MemoryIdentitySlot::default();
        assert_eq!(slot.load(), Ok(None));

        slot.store("{\"id\":\"1\"}").expect("store");
        assert_eq!(slot.load(), Ok(Some("{\"id\":\"1\"}".to_owned())));

        slot.clear().expect("clear");
        slot.clear().expect("clearing twice is fine");
        assert_eq!(slot.load(), Ok(None));
    }

    #[test]
    fn io_error_names_cause() {
        let err = IdentitySlotError::io("disk full");
        assert_eq!(err.to_string(), "identity slot i/o failed: disk full");
    }
}
