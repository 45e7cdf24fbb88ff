//! JSONL activity trail envelope.
//!
//! Every mutation can be recorded as a `TrailOperation` in per-actor
//! `{trail_dir}/{actor}.jsonl` files. Learning events use the student ID as
//! the actor; catalog authoring uses `catalog`.
//!
//! The `v` field supports schema versioning: trail lines without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, TrailOp};

/// Actor recorded for catalog authoring operations.
pub const CATALOG_ACTOR: &str = "catalog";

/// Current trail line version.
pub const TRAIL_VERSION: u32 = 1;

const fn default_trail_version() -> u32 {
    1
}

/// A single operation recorded in the JSONL trail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 for lines without this field.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// ISO 8601 timestamp of the operation.
    pub ts: String,

    /// Student ID, or [`CATALOG_ACTOR`] for authoring.
    pub actor: String,

    /// What kind of mutation this represents.
    pub op: TrailOp,

    /// Which entity type was affected.
    pub entity: EntityType,

    /// ID of the affected entity. Enrollments use `{course_id}:{student_id}`.
    pub id: String,

    /// Operation payload. Schema depends on `op` and `entity`.
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_op_default_version() {
        let json = r#"{"ts":"2026-01-01T00:00:00Z","actor":"stu-1","op":"complete","entity":"completion","id":"lsn-1","data":{}}"#;
        let op: TrailOperation = serde_json::from_str(json).unwrap();
        assert_eq!(op.v, 1);
        assert_eq!(op.op, TrailOp::Complete);
    }

    #[test]
    fn trail_op_serializes_snake_case() {
        let op = TrailOperation {
            v: TRAIL_VERSION,
            ts: "2026-02-08T12:00:00Z".into(),
            actor: CATALOG_ACTOR.into(),
            op: TrailOp::Transition,
            entity: EntityType::Assignment,
            id: "asg-1".into(),
            data: serde_json::json!({"from": "pending", "to": "submitted"}),
        };
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["op"], "transition");
        assert_eq!(value["entity"], "assignment");
    }
}
