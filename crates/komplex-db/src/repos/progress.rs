//! Progress engine.
//!
//! Progress is always computed from fresh reads of the course's current
//! lessons, assignments, and quizzes plus the student's completion sets. See
//! [`komplex_core::progress`] for the formula.

use komplex_core::entities::{Assignment, Enrollment, Quiz};
use komplex_core::enums::CompletionKind;
use komplex_core::progress::ProgressBreakdown;
use komplex_core::responses::ProgressReport;

use crate::error::DatabaseError;
use crate::service::KomplexService;

impl KomplexService {
    /// Per-category tallies. An unknown course yields empty tallies.
    #[must_use]
    pub fn progress_breakdown(&self, course_id: &str, student_id: &str) -> ProgressBreakdown {
        if self.get_course(course_id).is_none() {
            return ProgressBreakdown::default();
        }
        let keys = self.db().keys();
        let lessons = self.list_lessons(course_id);
        let assignments: Vec<Assignment> = self
            .db()
            .read_list::<Assignment>(&keys.assignments())
            .into_iter()
            .filter(|a| a.course_id == course_id)
            .collect();
        let quizzes: Vec<Quiz> = self
            .db()
            .read_list::<Quiz>(&keys.quizzes())
            .into_iter()
            .filter(|q| q.course_id == course_id)
            .collect();

        ProgressBreakdown::tally(
            &lessons,
            &assignments,
            &quizzes,
            &self.completed_ids(CompletionKind::Lesson, course_id, student_id),
            &self.completed_ids(CompletionKind::Quiz, course_id, student_id),
        )
    }

    /// Weighted progress in `0..=100`. Never fails; unknown courses score 0.
    #[must_use]
    pub fn calculate_progress(&self, course_id: &str, student_id: &str) -> u8 {
        self.progress_breakdown(course_id, student_id).percent()
    }

    /// Fresh percentage with its breakdown and the persisted enrollment.
    #[must_use]
    pub fn progress_report(&self, course_id: &str, student_id: &str) -> ProgressReport {
        let breakdown = self.progress_breakdown(course_id, student_id);
        ProgressReport {
            course_id: course_id.to_string(),
            student_id: student_id.to_string(),
            progress: breakdown.percent(),
            breakdown,
            enrollment: self.get_enrollment(course_id, student_id),
        }
    }

    /// Calculate progress and persist it on the enrollment. Returns `None`
    /// when the student is not enrolled.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn recompute_progress(
        &mut self,
        course_id: &str,
        student_id: &str,
    ) -> Result<Option<Enrollment>, DatabaseError> {
        let progress = self.calculate_progress(course_id, student_id);
        tracing::debug!(course_id, student_id, progress, "progress recomputed");
        self.update_progress(course_id, student_id, i64::from(progress))
    }

    /// Recompute every enrollment in the course. Returns how many were
    /// recomputed.
    ///
    /// Assignment status and the catalog are shared by all students of a
    /// course, so changing either moves every enrolled student.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn recompute_course_progress(&mut self, course_id: &str) -> Result<usize, DatabaseError> {
        let students: Vec<String> = self
            .enrollments_by_course(course_id)
            .into_iter()
            .map(|e| e.student_id)
            .collect();
        for student_id in &students {
            self.recompute_progress(course_id, student_id)?;
        }
        tracing::debug!(course_id, students = students.len(), "course progress recomputed");
        Ok(students.len())
    }

    /// Bring enrollments up to date after a lesson, assignment, or quiz was
    /// added or removed, signalling once when anyone is enrolled.
    pub(crate) fn catalog_changed(&mut self, course_id: &str) -> Result<(), DatabaseError> {
        if self.recompute_course_progress(course_id)? > 0 {
            self.notify_progress();
        }
        Ok(())
    }
}
