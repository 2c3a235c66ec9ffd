use super::{StateStore, StoreError};
use crate::desk::HotelState;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Mutex-backed store for tests. The failure switch lets rollback paths be
/// exercised without a real storage fault.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Mutex<Option<HotelState>>,
    fail_next_save: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `save` call report `StoreError::Unavailable`.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// The record set as last saved, if any save has happened.
    pub fn last_saved(&self) -> Option<HotelState> {
        self.saved.lock().expect("store poisoned").clone()
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> Result<HotelState, StoreError> {
        Ok(self
            .saved
            .lock()
            .expect("store poisoned")
            .clone()
            .unwrap_or_default())
    }

    fn save(&self, state: &HotelState) -> Result<(), StoreError> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected save failure".to_string()));
        }
        *self.saved.lock().expect("store poisoned") = Some(state.clone());
        Ok(())
    }
}
