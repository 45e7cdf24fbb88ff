//! Quiz repository: authoring with validation, and attempt submission.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use komplex_core::entities::{Quiz, QuizQuestion};
use komplex_core::enums::{EntityType, TrailOp};
use komplex_core::grading::{QuizOutcome, grade_quiz, validate_percentage, validate_question};
use komplex_core::ids::{PREFIX_QUESTION, PREFIX_QUIZ};
use komplex_core::trail::CATALOG_ACTOR;

use crate::error::DatabaseError;
use crate::service::KomplexService;

/// One question of a [`NewQuiz`]. Must carry exactly four options.
///
/// Deserializes from the same camelCase shape as a stored question, minus
/// the ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub points: u32,
}

/// Input for [`KomplexService::create_quiz`].
#[derive(Debug, Clone, Serialize)]
pub struct NewQuiz {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub time_limit_minutes: u32,
    pub passing_score: u8,
    pub questions: Vec<NewQuestion>,
}

impl KomplexService {
    pub(crate) fn read_quizzes(&self) -> Vec<Quiz> {
        self.db().read_list(&self.db().keys().quizzes())
    }

    fn write_quizzes(&mut self, quizzes: &[Quiz]) -> Result<(), DatabaseError> {
        let key = self.db().keys().quizzes();
        self.db_mut().write_list(&key, quizzes)
    }

    /// Create a quiz after validating the passing score and every question.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for malformed input, or
    /// `DatabaseError` if the store write fails.
    pub fn create_quiz(&mut self, new: NewQuiz) -> Result<Quiz, DatabaseError> {
        validate_percentage("passing score", new.passing_score)?;

        let mut questions = Vec::with_capacity(new.questions.len());
        for q in new.questions {
            let question = QuizQuestion {
                id: self.db().generate_id(PREFIX_QUESTION)?,
                question: q.question,
                options: q.options,
                correct_answer: q.correct_answer,
                points: q.points,
            };
            validate_question(&question)?;
            questions.push(question);
        }

        let quiz = Quiz {
            id: self.db().generate_id(PREFIX_QUIZ)?,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            questions,
            time_limit_minutes: new.time_limit_minutes,
            passing_score: new.passing_score,
            created_at: Utc::now(),
        };
        let mut quizzes = self.read_quizzes();
        quizzes.push(quiz.clone());
        self.write_quizzes(&quizzes)?;

        self.record(CATALOG_ACTOR, TrailOp::Create, EntityType::Quiz, &quiz.id, &quiz);
        self.catalog_changed(&quiz.course_id)?;
        Ok(quiz)
    }

    #[must_use]
    pub fn get_quiz(&self, id: &str) -> Option<Quiz> {
        self.read_quizzes().into_iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn list_quizzes(&self, course_id: &str) -> Vec<Quiz> {
        self.read_quizzes()
            .into_iter()
            .filter(|q| q.course_id == course_id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn delete_quiz(&mut self, id: &str) -> Result<bool, DatabaseError> {
        let mut quizzes = self.read_quizzes();
        let Some(pos) = quizzes.iter().position(|q| q.id == id) else {
            return Ok(false);
        };
        let removed = quizzes.remove(pos);
        self.write_quizzes(&quizzes)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Delete,
            EntityType::Quiz,
            id,
            &serde_json::json!({ "course_id": removed.course_id }),
        );
        self.catalog_changed(&removed.course_id)?;
        Ok(true)
    }

    /// Grade an attempt and mark the quiz complete for the student, whether
    /// or not they passed. Returns `None` for an unknown quiz.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn submit_quiz(
        &mut self,
        quiz_id: &str,
        student_id: &str,
        answers: &[Option<usize>],
    ) -> Result<Option<QuizOutcome>, DatabaseError> {
        let Some(quiz) = self.get_quiz(quiz_id) else {
            return Ok(None);
        };
        let outcome = grade_quiz(&quiz, answers);
        tracing::info!(
            quiz_id,
            student_id,
            score = outcome.score,
            passed = outcome.passed,
            "quiz graded"
        );
        self.mark_quiz_complete(&quiz.course_id, quiz_id, student_id)?;
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_quiz, question, test_service};
    use komplex_core::enums::CompletionKind;
    use komplex_core::errors::CoreError;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_assigns_question_ids() {
        let mut svc = test_service();
        let quiz = svc
            .create_quiz(new_quiz("crs-1", vec![question(0), question(2)]))
            .unwrap();
        assert!(quiz.id.starts_with("qiz-"));
        assert!(quiz.questions.iter().all(|q| q.id.starts_with("qst-")));
        assert_eq!(svc.list_quizzes("crs-1"), vec![quiz]);
    }

    #[test]
    fn create_rejects_three_options() {
        let mut svc = test_service();
        let mut bad = question(0);
        bad.options.pop();
        let err = svc.create_quiz(new_quiz("crs-1", vec![bad])).unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
        assert!(svc.list_quizzes("crs-1").is_empty());
    }

    #[test]
    fn create_rejects_passing_score_over_hundred() {
        let mut svc = test_service();
        let quiz = NewQuiz {
            passing_score: 120,
            ..new_quiz("crs-1", vec![question(0)])
        };
        assert!(svc.create_quiz(quiz).is_err());
    }

    #[test]
    fn failed_attempt_still_completes_quiz() {
        let mut svc = test_service();
        let quiz = svc
            .create_quiz(new_quiz("crs-1", vec![question(0), question(1)]))
            .unwrap();

        let outcome = svc
            .submit_quiz(&quiz.id, "stu-1", &[Some(3), None])
            .unwrap()
            .unwrap();
        assert_eq!(outcome.score, 0);
        assert!(!outcome.passed);
        assert_eq!(
            svc.completed_ids(CompletionKind::Quiz, "crs-1", "stu-1"),
            vec![quiz.id]
        );
    }

    #[test]
    fn submit_unknown_quiz_is_none() {
        let mut svc = test_service();
        assert!(svc.submit_quiz("qiz-x", "stu-1", &[]).unwrap().is_none());
    }
}
