//! Durable key/value slots backing the session state.
//!
//! Two logical slots survive page reloads: the token pair and the cached
//! user profile. Absence is a normal result, never an error, and a store
//! must tolerate garbage content (callers treat unparseable values as
//! absent). Browser builds persist to `localStorage`; native builds and
//! tests use the in-memory store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

/// The two persisted slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Session,
    Profile,
}

impl Slot {
    /// Storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Session => "spendboard_session",
            Slot::Profile => "spendboard_profile",
        }
    }
}

/// Durable slot storage.
///
/// Implementations never fail loudly: a read of a missing slot yields
/// `None`, and write/clear errors (storage quota, disabled localStorage)
/// are swallowed after logging, since losing the mirror only costs a
/// re-login after reload.
pub trait SlotStore: Send + Sync {
    fn read(&self, slot: Slot) -> Option<String>;
    fn write(&self, slot: Slot, value: &str);
    fn clear(&self, slot: Slot);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<String>>,
    profile: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, slot: Slot) -> std::sync::MutexGuard<'_, Option<String>> {
        let cell = match slot {
            Slot::Session => &self.session,
            Slot::Profile => &self.profile,
        };
        cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: Slot) -> Option<String> {
        self.cell(slot).clone()
    }

    fn write(&self, slot: Slot, value: &str) {
        *self.cell(slot) = Some(value.to_owned());
    }

    fn clear(&self, slot: Slot) {
        *self.cell(slot) = None;
    }
}

/// Browser store backed by `window.localStorage`.
///
/// Outside a browser (or with storage disabled) every read is absent and
/// writes are dropped, so the client degrades to a per-tab session.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

impl SlotStore for LocalStorageStore {
    fn read(&self, slot: Slot) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(slot.key()).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = slot;
            None
        }
    }

    fn write(&self, slot: Slot, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                if storage.set_item(slot.key(), value).is_err() {
                    log::warn!("failed to persist {} slot", slot.key());
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (slot, value);
        }
    }

    fn clear(&self, slot: Slot) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(slot.key());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = slot;
        }
    }
}
