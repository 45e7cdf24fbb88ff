//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to per-actor `{trail_dir}/{actor}.jsonl`
//! files using `serde_jsonlines::append_json_lines`.

use std::path::{Path, PathBuf};

use komplex_core::trail::TrailOperation;

use crate::error::DatabaseError;

/// Appends trail operations to per-actor JSONL files.
pub struct TrailWriter {
    trail_dir: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer for `trail_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the directory cannot be created.
    pub fn new(trail_dir: PathBuf) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&trail_dir)?;
        Ok(Self {
            trail_dir,
            enabled: true,
        })
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            trail_dir: PathBuf::new(),
            enabled: false,
        }
    }

    /// Suspend or resume writing. Demo seeding runs with writing suspended.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append `op` to `{trail_dir}/{actor}.jsonl`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file write fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), DatabaseError> {
        if !self.enabled {
            return Ok(());
        }
        let path = actor_file(&self.trail_dir, &op.actor);
        serde_jsonlines::append_json_lines(&path, [op])?;
        Ok(())
    }

    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}

/// Path of the trail file for `actor`. Characters outside `[A-Za-z0-9_-]`
/// are replaced so an actor ID can never escape the trail directory.
#[must_use]
pub fn actor_file(trail_dir: &Path, actor: &str) -> PathBuf {
    let safe: String = actor
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if safe.is_empty() { "_".to_string() } else { safe };
    trail_dir.join(format!("{stem}.jsonl"))
}
