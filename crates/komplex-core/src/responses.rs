//! Response types returned by the service and printed by `komplex` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, Course, Enrollment};
use crate::progress::ProgressBreakdown;

/// Response from `komplex progress`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressReport {
    pub course_id: String,
    pub student_id: String,
    /// Freshly computed percentage.
    pub progress: u8,
    pub breakdown: ProgressBreakdown,
    /// Persisted enrollment, if the student is enrolled.
    pub enrollment: Option<Enrollment>,
}

/// One enrolled course as shown on a student dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub course: Course,
    pub enrollment: Enrollment,
}

/// Response from `komplex dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentDashboard {
    pub student_id: String,
    pub courses: Vec<EnrolledCourse>,
    /// Mean progress over `courses`, rounded half up. 0 with no courses.
    pub overall_progress: u8,
    pub pending_assignments: Vec<Assignment>,
}

impl StudentDashboard {
    /// Assemble a dashboard, deriving `overall_progress` from `courses`.
    #[must_use]
    pub fn new(
        student_id: &str,
        courses: Vec<EnrolledCourse>,
        pending_assignments: Vec<Assignment>,
    ) -> Self {
        let overall_progress = if courses.is_empty() {
            0
        } else {
            let sum: u64 = courses
                .iter()
                .map(|c| u64::from(c.enrollment.progress))
                .sum();
            let n = courses.len() as u64;
            u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(100)
        };
        Self {
            student_id: student_id.to_string(),
            courses,
            overall_progress,
            pending_assignments,
        }
    }
}
