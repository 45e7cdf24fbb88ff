//! Weighted course-progress formula.
//!
//! Progress is a weighted sum of three category ratios:
//!
//! ```text
//! lessons      60 × completed / total
//! assignments  25 × completed / total
//! quizzes      15 × completed / total
//! ```
//!
//! A category with no items contributes 0; it is not dropped and the other
//! weights are not renormalized. A course without lessons therefore tops out
//! at 40. The sum is rounded half up using exact integer arithmetic, so
//! `42.5` always becomes `43` regardless of float representation.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, Lesson, Quiz};

pub const LESSON_WEIGHT: u32 = 60;
pub const ASSIGNMENT_WEIGHT: u32 = 25;
pub const QUIZ_WEIGHT: u32 = 15;

/// Completed versus total items in one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryTally {
    pub completed: u32,
    pub total: u32,
}

impl CategoryTally {
    /// Build a tally, capping `completed` at `total`.
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        let total = u32::try_from(total).unwrap_or(u32::MAX);
        let completed = u32::try_from(completed).unwrap_or(u32::MAX).min(total);
        Self { completed, total }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.total == 0
    }
}

/// Per-category tallies for one student in one course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressBreakdown {
    pub lessons: CategoryTally,
    pub assignments: CategoryTally,
    pub quizzes: CategoryTally,
}

impl ProgressBreakdown {
    /// Tally a course's current collections against a student's completion sets.
    ///
    /// Lessons and quizzes count when their ID is in the matching set; IDs in
    /// the sets that no longer belong to an item are ignored. Assignments count
    /// when their status is submitted or graded.
    #[must_use]
    pub fn tally(
        lessons: &[Lesson],
        assignments: &[Assignment],
        quizzes: &[Quiz],
        completed_lessons: &[String],
        completed_quizzes: &[String],
    ) -> Self {
        let done_lessons: HashSet<&str> = completed_lessons.iter().map(String::as_str).collect();
        let done_quizzes: HashSet<&str> = completed_quizzes.iter().map(String::as_str).collect();

        Self {
            lessons: CategoryTally::new(
                lessons
                    .iter()
                    .filter(|l| done_lessons.contains(l.id.as_str()))
                    .count(),
                lessons.len(),
            ),
            assignments: CategoryTally::new(
                assignments.iter().filter(|a| a.status.is_complete()).count(),
                assignments.len(),
            ),
            quizzes: CategoryTally::new(
                quizzes
                    .iter()
                    .filter(|q| done_quizzes.contains(q.id.as_str()))
                    .count(),
                quizzes.len(),
            ),
        }
    }

    /// Weighted completion percentage in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        let terms = [
            (LESSON_WEIGHT, self.lessons),
            (ASSIGNMENT_WEIGHT, self.assignments),
            (QUIZ_WEIGHT, self.quizzes),
        ];

        // Common denominator over the non-empty categories.
        let denominator: u128 = terms
            .iter()
            .filter(|(_, t)| !t.is_empty())
            .map(|(_, t)| u128::from(t.total))
            .product();

        let numerator: u128 = terms
            .iter()
            .filter(|(_, t)| !t.is_empty())
            .map(|(weight, t)| {
                u128::from(*weight) * u128::from(t.completed) * (denominator / u128::from(t.total))
            })
            .sum();

        let rounded = (2 * numerator + denominator) / (2 * denominator);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }
}
