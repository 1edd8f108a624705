//! Single-slot message passing
//!
//! A [`Mailbox`] holds at most one pending value. Posting replaces whatever
//! is pending; taking empties the slot. Handles are cheap clones sharing
//! the same slot, so the producer can live on another thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use framekey_shared::BindingDesc;

/// Mailbox carrying rebind requests to the input core.
pub type BindingMailbox = Mailbox<Vec<BindingDesc>>;

#[derive(Debug)]
pub struct Mailbox<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Post a value, replacing any pending one.
    pub fn post(&self, value: T) {
        *self.lock() = Some(value);
    }

    /// Take the pending value, if any.
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    // Poisoning cannot leave a partial value in the slot
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Mailbox<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
