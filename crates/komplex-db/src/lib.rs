//! # komplex-db
//!
//! Key-value backed state management for KOMPLEX.
//!
//! Holds every collection (courses, lessons, assignments, quizzes,
//! enrollments) and every per-student completion set in a [`KeyValueStore`],
//! and implements the progress engine on top of it:
//!
//! - completion tracking with idempotent insertion
//! - weighted progress recompute written back to the enrollment
//! - enrollment lifecycle (at most one per student and course)
//! - a broadcast notifier plus poll-based watcher for dashboards
//!
//! All mutations go through [`service::KomplexService`] and take `&mut self`,
//! so each read-modify-write runs as one uninterrupted unit.

pub mod error;
pub mod helpers;
pub mod keys;
pub mod kv;
pub mod notify;
pub mod repos;
pub mod service;
pub mod trail;
pub mod updates;
pub mod watch;

mod test_support;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use error::DatabaseError;
use keys::StorageKeys;
use kv::{FileStore, KeyValueStore, MemoryStore};

/// Central store handle: a key-value backend plus the key layout.
pub struct KomplexDb {
    kv: Box<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl KomplexDb {
    /// Wrap an arbitrary backend.
    #[must_use]
    pub fn new(kv: Box<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            kv,
            keys: StorageKeys::new(namespace),
        }
    }

    /// In-memory store with the default namespace.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), StorageKeys::default().namespace())
    }

    /// Store persisted to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened.
    pub fn open_file(path: impl AsRef<Path>, namespace: &str) -> Result<Self, DatabaseError> {
        let store = FileStore::open(path.as_ref())?;
        Ok(Self::new(Box::new(store), namespace))
    }

    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Access the raw backend for direct key reads.
    #[must_use]
    pub fn kv(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    /// Access the raw backend for direct key writes.
    pub fn kv_mut(&mut self) -> &mut dyn KeyValueStore {
        self.kv.as_mut()
    }

    /// Read a JSON array, skipping elements that fail to decode.
    ///
    /// Absent or unparseable values yield an empty list.
    #[must_use]
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.kv
            .get(key)
            .map(|raw| helpers::decode_list(key, &raw))
            .unwrap_or_default()
    }

    /// Write `items` as the JSON array under `key`.
    ///
    /// Elements already stored under `key` that do not decode as `T` are
    /// appended unchanged, so records this crate cannot read survive the
    /// read-modify-write cycles of the repositories.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or the backend write fails.
    pub fn write_list<T: Serialize + DeserializeOwned>(
        &mut self,
        key: &str,
        items: &[T],
    ) -> Result<(), DatabaseError> {
        let mut values = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(raw) = self.kv.get(key) {
            let kept = helpers::undecodable_elements::<T>(&raw);
            if !kept.is_empty() {
                tracing::debug!(key, kept = kept.len(), "preserving undecodable elements");
                values.extend(kept);
            }
        }
        self.write_json(key, &values)
    }

    /// Serialize `value` as JSON under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or the backend write fails.
    pub fn write_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), DatabaseError> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key, raw)
    }

    /// Generate a prefixed ID, e.g. `"crs-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the OS random source is unavailable.
    pub fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut random = [0u8; 4];
        getrandom::fill(&mut random)
            .map_err(|e| DatabaseError::Other(anyhow::anyhow!("random source failed: {e}")))?;
        Ok(komplex_core::ids::format_id(prefix, random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generate_id_correct_format() {
        let db = KomplexDb::in_memory();
        let id = db.generate_id("crs").unwrap();
        assert!(id.starts_with("crs-"), "ID should start with 'crs-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generate_id_all_prefixes() {
        let db = KomplexDb::in_memory();
        for prefix in komplex_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[test]
    fn generate_id_uniqueness() {
        let db = KomplexDb::in_memory();
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[test]
    fn read_list_of_absent_key_is_empty() {
        let db = KomplexDb::in_memory();
        let items: Vec<String> = db.read_list("komplex_courses");
        assert!(items.is_empty());
    }

    #[test]
    fn write_list_keeps_foreign_elements() {
        let mut db = KomplexDb::in_memory();
        db.write_json("k", &serde_json::json!(["a", 7])).unwrap();

        db.write_list("k", &["b".to_string()]).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&db.kv().get("k").unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!(["b", 7]));
    }

    #[test]
    fn write_then_read_list() {
        let mut db = KomplexDb::in_memory();
        db.write_json("k", &["a", "b"]).unwrap();
        let items: Vec<String> = db.read_list("k");
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }
}
