//! Enrollment lifecycle: at most one enrollment per (course, student) pair.

use chrono::Utc;

use komplex_core::entities::Enrollment;
use komplex_core::enums::{EntityType, TrailOp};

use crate::error::DatabaseError;
use crate::service::KomplexService;

fn enrollment_id(course_id: &str, student_id: &str) -> String {
    format!("{course_id}:{student_id}")
}

impl KomplexService {
    pub(crate) fn read_enrollments(&self) -> Vec<Enrollment> {
        self.db().read_list(&self.db().keys().enrollments())
    }

    fn write_enrollments(&mut self, enrollments: &[Enrollment]) -> Result<(), DatabaseError> {
        let key = self.db().keys().enrollments();
        self.db_mut().write_list(&key, enrollments)
    }

    /// Enroll a student. An existing enrollment is returned unchanged;
    /// otherwise a fresh one is stored and the course's student count
    /// rewritten.
    ///
    /// The course is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn enroll(&mut self, course_id: &str, student_id: &str) -> Result<Enrollment, DatabaseError> {
        let mut enrollments = self.read_enrollments();
        if let Some(existing) = enrollments.iter().find(|e| e.is_for(course_id, student_id)) {
            return Ok(existing.clone());
        }

        let enrollment = Enrollment::new(course_id, student_id, Utc::now());
        enrollments.push(enrollment.clone());
        self.write_enrollments(&enrollments)?;
        self.refresh_course_counts(course_id)?;

        self.record(
            student_id,
            TrailOp::Enroll,
            EntityType::Enrollment,
            &enrollment_id(course_id, student_id),
            &enrollment,
        );
        tracing::info!(course_id, student_id, "student enrolled");
        self.notify_progress();
        Ok(enrollment)
    }

    #[must_use]
    pub fn get_enrollment(&self, course_id: &str, student_id: &str) -> Option<Enrollment> {
        self.read_enrollments()
            .into_iter()
            .find(|e| e.is_for(course_id, student_id))
    }

    /// Last persisted progress, without recomputing. 0 when not enrolled.
    #[must_use]
    pub fn get_progress(&self, course_id: &str, student_id: &str) -> u8 {
        self.get_enrollment(course_id, student_id)
            .map_or(0, |e| e.progress)
    }

    /// Clamp `raw` into `0..=100` and persist it with the derived `completed`
    /// flag. Returns `None` when the student is not enrolled.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn update_progress(
        &mut self,
        course_id: &str,
        student_id: &str,
        raw: i64,
    ) -> Result<Option<Enrollment>, DatabaseError> {
        let mut enrollments = self.read_enrollments();
        let Some(slot) = enrollments
            .iter_mut()
            .find(|e| e.is_for(course_id, student_id))
        else {
            return Ok(None);
        };

        let updated = slot.with_progress(raw);
        if *slot == updated {
            return Ok(Some(updated));
        }
        let previous = slot.progress;
        *slot = updated.clone();
        self.write_enrollments(&enrollments)?;

        self.record(
            student_id,
            TrailOp::Progress,
            EntityType::Enrollment,
            &enrollment_id(course_id, student_id),
            &serde_json::json!({ "from": previous, "to": updated.progress }),
        );
        if updated.completed {
            tracing::info!(course_id, student_id, "course completed");
        }
        Ok(Some(updated))
    }

    #[must_use]
    pub fn enrollments_by_student(&self, student_id: &str) -> Vec<Enrollment> {
        self.read_enrollments()
            .into_iter()
            .filter(|e| e.student_id == student_id)
            .collect()
    }

    #[must_use]
    pub fn enrollments_by_course(&self, course_id: &str) -> Vec<Enrollment> {
        self.read_enrollments()
            .into_iter()
            .filter(|e| e.course_id == course_id)
            .collect()
    }
}
