//! Entity structs for all KOMPLEX domain objects.
//!
//! Each collection entity is persisted as one element of a JSON array under
//! its collection key (see `komplex-db`). Field names are camelCase and a few
//! are renamed to the spelling the browser client used (`students`,
//! `lessons`, `videoUrl`, `timeLimit`) so existing data decodes as-is.

mod assignment;
mod course;
mod enrollment;
mod lesson;
mod quiz;

pub use assignment::Assignment;
pub use course::Course;
pub use enrollment::Enrollment;
pub use lesson::Lesson;
pub use quiz::{QUIZ_OPTION_COUNT, Quiz, QuizQuestion};
