use anyhow::Context;

use komplex_core::enums::EntityType;
use komplex_db::repos::quiz::{NewQuestion, NewQuiz};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::commands::course::DeleteResponse;
use crate::commands::shared::lookup::require;
use crate::commands::shared::parse::parse_answers;
use crate::context::AppContext;
use crate::output::output;

/// Read a JSON array of questions from `path`.
fn read_questions(path: &str) -> anyhow::Result<Vec<NewQuestion>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read questions file {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid questions in {path}"))
}

/// Handle `komplex quiz`.
pub fn handle(action: &QuizCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        QuizCommands::Create {
            course,
            title,
            description,
            time_limit,
            passing_score,
            questions,
        } => {
            let quiz = ctx.service.create_quiz(NewQuiz {
                course_id: course.clone(),
                title: title.clone(),
                description: description.clone(),
                time_limit_minutes: *time_limit,
                passing_score: *passing_score,
                questions: read_questions(questions)?,
            })?;
            output(&quiz, flags.format)
        }
        QuizCommands::List { course } => output(&ctx.service.list_quizzes(course), flags.format),
        QuizCommands::Get { id } => output(
            &require(ctx.service.get_quiz(id), EntityType::Quiz, id)?,
            flags.format,
        ),
        QuizCommands::Delete { id } => {
            let deleted = ctx.service.delete_quiz(id)?;
            output(
                &DeleteResponse {
                    id: id.clone(),
                    deleted,
                },
                flags.format,
            )
        }
        QuizCommands::Submit {
            id,
            student,
            answers,
        } => {
            let answers = parse_answers(answers)?;
            let outcome = ctx.service.submit_quiz(id, student, &answers)?;
            output(&require(outcome, EntityType::Quiz, id)?, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_questions() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"[{"question":"What is Java?","options":["a","b","c","d"],"correctAnswer":0,"points":10}]"#,
        )
        .unwrap();

        let questions = read_questions(path.to_str().unwrap()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, 0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_questions("/nonexistent/questions.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }
}
