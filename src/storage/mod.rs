//! Persistence gateway for the front-desk record set.
//!
//! The core is agnostic to the backing format: it only requires that
//! [`StateStore::save`] is durable before a command reports success and that
//! [`StateStore::load`] reconstructs an equivalent record set after a
//! restart.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::desk::HotelState;

/// Storage abstraction so the service layer can be exercised in isolation.
pub trait StateStore {
    /// Reconstruct the record set. A store with no prior data returns the
    /// empty state; malformed data is an error, never a silent reset.
    fn load(&self) -> Result<HotelState, StoreError>;

    /// Durably persist the full record set.
    fn save(&self, state: &HotelState) -> Result<(), StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Result<HotelState, StoreError> {
        (**self).load()
    }

    fn save(&self, state: &HotelState) -> Result<(), StoreError> {
        (**self).save(state)
    }
}

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("data file is malformed: {0}")]
    Format(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
