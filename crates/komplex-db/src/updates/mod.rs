//! Partial-update builders for catalog entities.
//!
//! Each update holds only the fields to change. `Option<Option<T>>` fields
//! distinguish "leave alone" (`None`) from "clear" (`Some(None)`).

pub mod assignment;
pub mod course;
pub mod lesson;

pub use assignment::{AssignmentUpdate, AssignmentUpdateBuilder};
pub use course::{CourseUpdate, CourseUpdateBuilder};
pub use lesson::{LessonUpdate, LessonUpdateBuilder};
