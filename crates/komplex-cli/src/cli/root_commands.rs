use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AssignmentCommands, CompletionTarget, CourseCommands, LessonCommands, QuizCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Lessons within a course.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Assignments, submission, and grading.
    Assignment {
        #[command(subcommand)]
        action: AssignmentCommands,
    },
    /// Quizzes and quiz attempts.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Enroll a student in a course.
    Enroll(EnrollArgs),
    /// Mark a lesson watched or a quiz taken.
    Complete(CompleteArgs),
    /// Show (or override) a student's progress in a course.
    Progress(ProgressArgs),
    /// Student dashboard across all enrolled courses.
    Dashboard(DashboardArgs),
    /// Activity trail.
    History(HistoryArgs),
    /// Print the JSON Schema of a stored record or response.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EnrollArgs {
    #[arg(long)]
    pub course: String,
    #[arg(long)]
    pub student: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompleteArgs {
    /// What was finished.
    pub kind: CompletionTarget,
    /// Lesson or quiz ID.
    pub item_id: String,
    #[arg(long)]
    pub course: String,
    #[arg(long)]
    pub student: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProgressArgs {
    #[arg(long)]
    pub course: String,
    #[arg(long)]
    pub student: String,
    /// Persist this value (clamped to 0-100) instead of reporting.
    #[arg(long)]
    pub set: Option<i64>,
    /// Recompute and persist before reporting.
    #[arg(long, conflicts_with = "set")]
    pub recompute: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    #[arg(long)]
    pub student: String,
    /// Keep running and re-render on every change or poll tick.
    #[arg(long)]
    pub watch: bool,
    /// Poll interval in milliseconds (defaults to `sync.poll_interval_ms`).
    #[arg(long, requires = "watch")]
    pub interval_ms: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Student ID, or `catalog` for authoring events. All actors when absent.
    #[arg(long)]
    pub actor: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: course, lesson, assignment, quiz, enrollment, progress,
    /// dashboard, quiz-outcome, trail
    pub type_name: String,
}
