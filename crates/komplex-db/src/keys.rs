//! Storage key layout.
//!
//! ```text
//! {ns}_courses | {ns}_lessons | {ns}_assignments | {ns}_quizzes | {ns}_enrollments
//! {ns}_completed_lessons_{student_id}_{course_id}
//! {ns}_completed_quizzes_{student_id}_{course_id}
//! ```
//!
//! With the default `komplex` namespace these are the keys the browser
//! client used, so an exported local-storage map loads directly.

use komplex_core::enums::CompletionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
}

impl StorageKeys {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn courses(&self) -> String {
        format!("{}_courses", self.namespace)
    }

    #[must_use]
    pub fn lessons(&self) -> String {
        format!("{}_lessons", self.namespace)
    }

    #[must_use]
    pub fn assignments(&self) -> String {
        format!("{}_assignments", self.namespace)
    }

    #[must_use]
    pub fn quizzes(&self) -> String {
        format!("{}_quizzes", self.namespace)
    }

    #[must_use]
    pub fn enrollments(&self) -> String {
        format!("{}_enrollments", self.namespace)
    }

    /// Completion-set key scoped by kind, student, and course.
    #[must_use]
    pub fn completed(&self, kind: CompletionKind, student_id: &str, course_id: &str) -> String {
        format!(
            "{}_completed_{}_{student_id}_{course_id}",
            self.namespace,
            kind.key_segment()
        )
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new("komplex")
    }
}
