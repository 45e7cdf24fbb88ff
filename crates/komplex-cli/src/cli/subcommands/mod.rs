pub mod assignment;
pub mod course;
pub mod lesson;
pub mod quiz;

pub use assignment::AssignmentCommands;
pub use course::CourseCommands;
pub use lesson::LessonCommands;
pub use quiz::QuizCommands;

use clap::ValueEnum;

/// Item kind accepted by `komplex complete`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionTarget {
    Lesson,
    Quiz,
}
