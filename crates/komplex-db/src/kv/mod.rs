//! Key-value store abstraction.
//!
//! The store is the only durability mechanism: a synchronous, string-keyed
//! map. Reads never fail; implementations that persist keep the whole map in
//! memory and write through on every mutation.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::DatabaseError;

/// Synchronous string-keyed persistent map.
pub trait KeyValueStore: Send {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the value cannot be persisted.
    fn set(&mut self, key: &str, value: String) -> Result<(), DatabaseError>;

    /// Remove `key`. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<bool, DatabaseError>;

    /// Reload from the backing medium. A no-op for stores nothing else
    /// writes to.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backing medium cannot be read.
    fn refresh(&mut self) -> Result<(), DatabaseError> {
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
