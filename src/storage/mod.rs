//! Durable key-value storage for saved rounds and statistics
//!
//! Backends implement [`KeyValueStore`]. The [`Persistence`] gateway sits in
//! front of a backend, serializes values as JSON, validates what it reads back,
//! and clears records that fail validation. Storage trouble never escapes the
//! gateway; the game simply continues without durability.

mod file;
mod gateway;
mod memory;

pub use file::FileStore;
pub use gateway::{GAME_STATE_KEY, GAME_STATS_KEY, PersistError, Persisted, Persistence};
pub use memory::{DisabledStore, MemoryStore};

use thiserror::Error;

/// Backend failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-keyed store of string documents
pub trait KeyValueStore {
    /// Whether the backend can currently be written to
    fn is_available(&self) -> bool;

    /// Read the document under `key`, `None` if there is none
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous document
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the document under `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Any backend, chosen at runtime
impl KeyValueStore for Box<dyn KeyValueStore> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
