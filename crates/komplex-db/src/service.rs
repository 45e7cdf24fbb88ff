//! Service layer orchestrating store mutations with the trail and notifier.
//!
//! `KomplexService` wraps `KomplexDb` (key-value access), `TrailWriter` (JSONL
//! activity log), and `ProgressNotifier` (change broadcast). All repo methods
//! are implemented as `impl KomplexService` in `repos/`.

use chrono::Utc;
use serde::Serialize;

use komplex_config::KomplexConfig;
use komplex_core::enums::{EntityType, TrailOp};
use komplex_core::trail::{TRAIL_VERSION, TrailOperation};

use crate::KomplexDb;
use crate::error::DatabaseError;
use crate::notify::ProgressNotifier;
use crate::trail::writer::TrailWriter;

/// Orchestrates store mutations.
///
/// Every mutation method follows this protocol:
/// 1. Read the affected collections fresh from the store
/// 2. Modify and write them back
/// 3. Recompute derived values (course counts, enrollment progress)
/// 4. Append a trail operation
/// 5. Fire the notifier if progress may have changed
///
/// Mutations take `&mut self`, so no other call can observe a half-applied
/// step through the same service.
pub struct KomplexService {
    db: KomplexDb,
    trail: TrailWriter,
    notifier: ProgressNotifier,
}

impl KomplexService {
    #[must_use]
    pub const fn new(db: KomplexDb, trail: TrailWriter, notifier: ProgressNotifier) -> Self {
        Self {
            db,
            trail,
            notifier,
        }
    }

    /// In-memory service with the trail disabled and no demo data.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            KomplexDb::in_memory(),
            TrailWriter::disabled(),
            ProgressNotifier::default(),
        )
    }

    /// Open the store, trail, and notifier described by `config`, seeding the
    /// demo catalog when enabled and the store has no courses yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store file or trail directory cannot be
    /// opened, or seeding fails to write.
    pub fn open(config: &KomplexConfig) -> Result<Self, DatabaseError> {
        let namespace = config.storage.namespace.as_str();
        let db = if config.storage.is_persistent() {
            KomplexDb::open_file(&config.storage.path, namespace)?
        } else {
            KomplexDb::new(Box::new(crate::kv::MemoryStore::new()), namespace)
        };
        let trail = match config.trail.active_dir() {
            Some(dir) => TrailWriter::new(dir)?,
            None => TrailWriter::disabled(),
        };
        let notifier = ProgressNotifier::new(config.sync.channel_capacity);

        let mut service = Self::new(db, trail, notifier);
        if config.general.seed_demo_data {
            service.seed_demo_catalog()?;
        }
        Ok(service)
    }

    #[must_use]
    pub const fn db(&self) -> &KomplexDb {
        &self.db
    }

    pub const fn db_mut(&mut self) -> &mut KomplexDb {
        &mut self.db
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    pub const fn trail_mut(&mut self) -> &mut TrailWriter {
        &mut self.trail
    }

    #[must_use]
    pub const fn notifier(&self) -> &ProgressNotifier {
        &self.notifier
    }

    /// Re-read the backing store so writes from other processes become
    /// visible. Watch loops call this on every poll.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be read.
    pub fn reload_store(&mut self) -> Result<(), DatabaseError> {
        self.db.kv_mut().refresh()
    }

    /// Append a trail line. The store is authoritative, so a failed append is
    /// logged rather than failing the mutation that already happened.
    pub(crate) fn record(
        &self,
        actor: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &impl Serialize,
    ) {
        if !self.trail.is_enabled() {
            return;
        }
        let data = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%entity, id, "trail payload not serializable: {e}");
                serde_json::Value::Null
            }
        };
        let line = TrailOperation {
            v: TRAIL_VERSION,
            ts: Utc::now().to_rfc3339(),
            actor: actor.to_string(),
            op,
            entity,
            id: id.to_string(),
            data,
        };
        if let Err(e) = self.trail.append(&line) {
            tracing::warn!(%entity, id, "failed to append trail line: {e}");
        }
    }

    /// Broadcast a progress change to every observer.
    pub(crate) fn notify_progress(&self) {
        let reached = self.notifier.fire();
        tracing::trace!(reached, "progress change signalled");
    }
}
