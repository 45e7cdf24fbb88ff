//! Quiz grading and quiz authoring validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{QUIZ_OPTION_COUNT, Quiz, QuizQuestion};
use crate::errors::CoreError;

/// Result of grading one quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizOutcome {
    pub quiz_id: String,
    pub correct: u32,
    pub total: u32,
    /// Percentage of questions answered correctly, rounded half up.
    pub score: u8,
    pub earned_points: u32,
    pub total_points: u32,
    pub passed: bool,
}

/// Grade `answers` against `quiz`. `answers[i]` is the option picked for
/// question `i`; `None` or a missing entry counts as wrong.
///
/// A quiz with no questions scores 0.
#[must_use]
pub fn grade_quiz(quiz: &Quiz, answers: &[Option<usize>]) -> QuizOutcome {
    let mut correct = 0u32;
    let mut earned_points = 0u32;
    for (idx, question) in quiz.questions.iter().enumerate() {
        if answers.get(idx).copied().flatten() == Some(question.correct_answer) {
            correct += 1;
            earned_points += question.points;
        }
    }

    let total = u32::try_from(quiz.questions.len()).unwrap_or(u32::MAX);
    let total_points = quiz.questions.iter().map(|q| q.points).sum();
    let score = if total == 0 {
        0
    } else {
        let rounded = (200 * u64::from(correct) + u64::from(total)) / (2 * u64::from(total));
        u8::try_from(rounded.min(100)).unwrap_or(100)
    };

    QuizOutcome {
        quiz_id: quiz.id.clone(),
        correct,
        total,
        score,
        earned_points,
        total_points,
        passed: total > 0 && score >= quiz.passing_score,
    }
}

/// Check a question has exactly four options and an in-range answer index.
///
/// # Errors
///
/// Returns `CoreError::Validation` describing the first problem found.
pub fn validate_question(question: &QuizQuestion) -> Result<(), CoreError> {
    if question.question.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "question {} has no text",
            question.id
        )));
    }
    if question.options.len() != QUIZ_OPTION_COUNT {
        return Err(CoreError::Validation(format!(
            "question {} must have {QUIZ_OPTION_COUNT} options, got {}",
            question.id,
            question.options.len()
        )));
    }
    if question.correct_answer >= question.options.len() {
        return Err(CoreError::Validation(format!(
            "question {} correct answer index {} is out of range",
            question.id, question.correct_answer
        )));
    }
    Ok(())
}

/// Check a passing score is a percentage.
///
/// # Errors
///
/// Returns `CoreError::Validation` when `score > 100`.
pub fn validate_percentage(field: &str, score: u8) -> Result<(), CoreError> {
    if score > 100 {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and 100, got {score}"
        )));
    }
    Ok(())
}
