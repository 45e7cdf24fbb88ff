//! Reading the trail back for `komplex history`.

use std::path::Path;

use komplex_core::trail::{TRAIL_VERSION, TrailOperation};

use crate::error::DatabaseError;
use crate::trail::writer::actor_file;

/// Read every operation recorded for `actor`, oldest first.
///
/// A missing file means no history. Lines with an unsupported version are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `DatabaseError::Io` if the file exists but a line cannot be read
/// or decoded.
pub fn read_actor(trail_dir: &Path, actor: &str) -> Result<Vec<TrailOperation>, DatabaseError> {
    let path = actor_file(trail_dir, actor);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let ops = serde_jsonlines::json_lines::<TrailOperation, _>(&path)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(keep_supported(ops))
}

/// Read every `*.jsonl` file in `trail_dir`, merged and sorted by timestamp.
///
/// # Errors
///
/// Returns `DatabaseError::Io` if the directory or a file cannot be read.
pub fn read_all(trail_dir: &Path) -> Result<Vec<TrailOperation>, DatabaseError> {
    if !trail_dir.exists() {
        return Ok(Vec::new());
    }
    let mut all = Vec::new();
    for entry in std::fs::read_dir(trail_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        let ops = serde_jsonlines::json_lines::<TrailOperation, _>(&path)?
            .collect::<Result<Vec<_>, _>>()?;
        all.extend(ops);
    }
    all.sort_by(|a, b| a.ts.cmp(&b.ts));
    Ok(keep_supported(all))
}

fn keep_supported(ops: Vec<TrailOperation>) -> Vec<TrailOperation> {
    ops.into_iter()
        .filter(|op| {
            let ok = op.v == TRAIL_VERSION;
            if !ok {
                tracing::warn!(version = op.v, id = %op.id, "skipping unsupported trail line");
            }
            ok
        })
        .collect()
}
