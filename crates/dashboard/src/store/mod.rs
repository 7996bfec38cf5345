//! Session persistence.
//!
//! A store holds at most one serialized [`Session`] under a fixed key. The
//! controller loads it once at startup, saves it on every change and clears
//! it on logout.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::session::Session;

/// Errors that can occur reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lock guarding the store was poisoned.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Persistence for the single session record.
pub trait SessionStore {
    /// Read the stored session, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be read or decoded.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be encoded or written.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record exists but cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}
