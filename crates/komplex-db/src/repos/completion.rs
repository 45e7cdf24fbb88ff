//! Completion tracker: per-student, per-course sets of finished lessons and
//! quizzes.
//!
//! Inserting a new ID persists the set, recomputes the student's progress,
//! and fires the notifier. Inserting an ID already present does nothing.

use komplex_core::enums::{CompletionKind, EntityType, TrailOp};

use crate::error::DatabaseError;
use crate::helpers::dedup_ids;
use crate::service::KomplexService;

impl KomplexService {
    /// IDs in the student's completion set, in insertion order.
    #[must_use]
    pub fn completed_ids(
        &self,
        kind: CompletionKind,
        course_id: &str,
        student_id: &str,
    ) -> Vec<String> {
        let key = self.db().keys().completed(kind, student_id, course_id);
        dedup_ids(self.db().read_list(&key))
    }

    /// Mark a lesson watched. Returns whether the ID was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn mark_lesson_complete(
        &mut self,
        course_id: &str,
        lesson_id: &str,
        student_id: &str,
    ) -> Result<bool, DatabaseError> {
        self.mark_complete(CompletionKind::Lesson, course_id, lesson_id, student_id)
    }

    /// Mark a quiz taken. Returns whether the ID was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn mark_quiz_complete(
        &mut self,
        course_id: &str,
        quiz_id: &str,
        student_id: &str,
    ) -> Result<bool, DatabaseError> {
        self.mark_complete(CompletionKind::Quiz, course_id, quiz_id, student_id)
    }

    fn mark_complete(
        &mut self,
        kind: CompletionKind,
        course_id: &str,
        item_id: &str,
        student_id: &str,
    ) -> Result<bool, DatabaseError> {
        let mut ids = self.completed_ids(kind, course_id, student_id);
        if ids.iter().any(|id| id == item_id) {
            tracing::debug!(%kind, item_id, student_id, "already complete");
            return Ok(false);
        }
        ids.push(item_id.to_string());

        let key = self.db().keys().completed(kind, student_id, course_id);
        self.db_mut().write_list(&key, &ids)?;

        self.record(
            student_id,
            TrailOp::Complete,
            EntityType::Completion,
            item_id,
            &serde_json::json!({ "kind": kind, "course_id": course_id }),
        );
        tracing::info!(%kind, item_id, course_id, student_id, "marked complete");

        self.recompute_progress(course_id, student_id)?;
        self.notify_progress();
        Ok(true)
    }
}
