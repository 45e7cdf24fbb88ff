use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Binds a student to a course and caches their progress.
///
/// Identity is the `(course_id, student_id)` pair. `completed` is always
/// `progress >= 100`; use [`Enrollment::with_progress`] to keep them in step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub course_id: String,
    pub student_id: String,
    pub progress: u8,
    pub completed: bool,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Fresh enrollment with zero progress.
    #[must_use]
    pub fn new(course_id: &str, student_id: &str, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            course_id: course_id.to_string(),
            student_id: student_id.to_string(),
            progress: 0,
            completed: false,
            enrolled_at,
        }
    }

    /// Whether this record belongs to the given pair.
    #[must_use]
    pub fn is_for(&self, course_id: &str, student_id: &str) -> bool {
        self.course_id == course_id && self.student_id == student_id
    }

    /// Copy with `raw` clamped into `0..=100` and `completed` derived from it.
    #[must_use]
    pub fn with_progress(&self, raw: i64) -> Self {
        let progress = u8::try_from(raw.clamp(0, 100)).unwrap_or(100);
        Self {
            progress,
            completed: progress >= 100,
            ..self.clone()
        }
    }
}
