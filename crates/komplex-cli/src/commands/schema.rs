use schemars::schema_for;

use komplex_core::entities::{Assignment, Course, Enrollment, Lesson, Quiz};
use komplex_core::grading::QuizOutcome;
use komplex_core::responses::{ProgressReport, StudentDashboard};
use komplex_core::trail::TrailOperation;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Handle `komplex schema`. Always prints JSON regardless of `--format`.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", schema_json(&args.type_name)?);
    Ok(())
}

fn schema_json(type_name: &str) -> anyhow::Result<String> {
    let schema = match type_name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "course" => schema_for!(Course),
        "lesson" => schema_for!(Lesson),
        "assignment" => schema_for!(Assignment),
        "quiz" => schema_for!(Quiz),
        "enrollment" => schema_for!(Enrollment),
        "progress" => schema_for!(ProgressReport),
        "dashboard" => schema_for!(StudentDashboard),
        "quiz-outcome" => schema_for!(QuizOutcome),
        "trail" => schema_for!(TrailOperation),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected course, lesson, assignment, quiz, \
             enrollment, progress, dashboard, quiz-outcome, trail)"
        ),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
