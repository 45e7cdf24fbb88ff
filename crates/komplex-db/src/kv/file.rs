use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::DatabaseError;

/// Store persisted as one JSON object (`{"key": "value", ...}`) on disk.
///
/// The whole map is held in memory. Every mutation rewrites the file through
/// a temp file in the same directory followed by a rename, so a crash leaves
/// either the old or the new map, never a torn one.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file opens empty. A file that is not a JSON string map is
    /// treated as absent: it opens empty with a warning and is replaced on
    /// the next write.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file exists but cannot be read, or
    /// the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let entries = read_entries(&path)?;

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), DatabaseError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, DatabaseError> {
    match std::fs::read_to_string(path) {
        Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
        Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                "store file is not a JSON string map, starting empty: {e}"
            );
            BTreeMap::new()
        })),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(e.into()),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), DatabaseError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            // Keep memory in step with disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, DatabaseError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(false);
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(true)
    }

    /// Re-read the file, picking up writes made by other processes.
    fn refresh(&mut self) -> Result<(), DatabaseError> {
        self.entries = read_entries(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("komplex_courses", "[]".into()).unwrap();
        store.set("other", "x".into()).unwrap();
        assert!(store.remove("other").unwrap());
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("komplex_courses").as_deref(), Some("[]"));
        assert_eq!(reopened.get("other"), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);

        store.set("k", "v".into()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("k", "v".into()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn removing_absent_key_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(!store.remove("missing").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn refresh_sees_other_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut reader = FileStore::open(&path).unwrap();
        let mut writer = FileStore::open(&path).unwrap();
        writer.set("k", "v".into()).unwrap();

        assert_eq!(reader.get("k"), None);
        reader.refresh().unwrap();
        assert_eq!(reader.get("k").as_deref(), Some("v"));
    }
}
