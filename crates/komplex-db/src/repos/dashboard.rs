//! Student dashboard reconciliation.
//!
//! A dashboard refresh recomputes every enrollment of the student, so the
//! view converges even when a progress signal was missed. Watchers call this
//! on each wake.

use std::collections::HashSet;

use komplex_core::enums::AssignmentStatus;
use komplex_core::responses::{EnrolledCourse, StudentDashboard};

use crate::error::DatabaseError;
use crate::service::KomplexService;

impl KomplexService {
    /// Recompute and persist progress for each of the student's enrollments
    /// whose course still exists, then assemble the dashboard.
    ///
    /// Does not fire the notifier.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn student_dashboard(&mut self, student_id: &str) -> Result<StudentDashboard, DatabaseError> {
        let mut courses = Vec::new();
        for enrollment in self.enrollments_by_student(student_id) {
            let Some(course) = self.get_course(&enrollment.course_id) else {
                tracing::debug!(
                    course_id = %enrollment.course_id,
                    student_id,
                    "skipping enrollment of deleted course"
                );
                continue;
            };
            let Some(enrollment) = self.recompute_progress(&course.id, student_id)? else {
                continue;
            };
            courses.push(EnrolledCourse { course, enrollment });
        }

        let enrolled: HashSet<&str> = courses.iter().map(|c| c.course.id.as_str()).collect();
        let pending = self
            .read_assignments()
            .into_iter()
            .filter(|a| a.status == AssignmentStatus::Pending && enrolled.contains(a.course_id.as_str()))
            .collect();

        Ok(StudentDashboard::new(student_id, courses, pending))
    }
}
