//! Demo catalog written on first run.

use chrono::{DateTime, NaiveDate, Utc};

use komplex_core::entities::{Assignment, Course, Enrollment, Lesson, Quiz, QuizQuestion};
use komplex_core::enums::{AssignmentStatus, CourseLevel};

use crate::error::DatabaseError;
use crate::service::KomplexService;

const DEMO_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// The catalog a fresh store starts with.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub courses: Vec<Course>,
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
    pub quizzes: Vec<Quiz>,
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    educator: (&str, &str),
    level: CourseLevel,
    category: &str,
    image: &str,
    now: DateTime<Utc>,
) -> Course {
    Course {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        educator_id: educator.0.into(),
        educator_name: educator.1.into(),
        level,
        student_count: 0,
        lesson_count: 0,
        image: Some(image.into()),
        category: category.into(),
        created_at: now,
    }
}

fn options(all: [&str; 4]) -> Vec<String> {
    all.iter().map(|s| (*s).to_string()).collect()
}

impl DemoCatalog {
    #[must_use]
    pub fn build(now: DateTime<Utc>) -> Self {
        let mut courses = vec![
            course(
                "crs-00000001",
                "Java Programming Basics",
                "Learn the fundamentals of Java programming from scratch",
                ("edu-00000001", "Mr. Sophea"),
                CourseLevel::Beginner,
                "Programming",
                "/java-programming-course.jpg",
                now,
            ),
            course(
                "crs-00000002",
                "Web Design Fundamentals",
                "Master HTML, CSS, and responsive design principles",
                ("edu-00000001", "Ms. Chantrea"),
                CourseLevel::Beginner,
                "Web Design",
                "/web-design-course.jpg",
                now,
            ),
            course(
                "crs-00000003",
                "English Communication",
                "Improve your English speaking and writing skills",
                ("edu-00000002", "Mr. David"),
                CourseLevel::Intermediate,
                "Languages",
                "/english-course.jpg",
                now,
            ),
        ];

        let lessons = vec![
            Lesson {
                id: "lsn-00000001".into(),
                course_id: "crs-00000001".into(),
                title: "Introduction to Java".into(),
                description: "Learn what Java is and why it matters".into(),
                video_ref: DEMO_VIDEO.into(),
                order: 1,
                resources: Vec::new(),
                created_at: now,
            },
            Lesson {
                id: "lsn-00000002".into(),
                course_id: "crs-00000001".into(),
                title: "Variables and Data Types".into(),
                description: "Understand how to store and manage data".into(),
                video_ref: DEMO_VIDEO.into(),
                order: 2,
                resources: Vec::new(),
                created_at: now,
            },
        ];

        let assignments = vec![
            Assignment {
                id: "asg-00000001".into(),
                course_id: "crs-00000001".into(),
                title: "Build a Calculator Program".into(),
                description: Some("Create a simple calculator using Java".into()),
                due_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap_or_default(),
                points: 100,
                instructions: Some("Submit your Java source code files".into()),
                status: AssignmentStatus::Pending,
                grade: None,
                created_at: now,
            },
            Assignment {
                id: "asg-00000002".into(),
                course_id: "crs-00000002".into(),
                title: "Create a Responsive Website".into(),
                description: Some("Design and implement a responsive website".into()),
                due_date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap_or_default(),
                points: 100,
                instructions: Some("Submit HTML, CSS, and JavaScript files".into()),
                status: AssignmentStatus::Submitted,
                grade: Some(95),
                created_at: now,
            },
        ];

        let quizzes = vec![Quiz {
            id: "qiz-00000001".into(),
            course_id: "crs-00000001".into(),
            title: "Chapter 1 Review Quiz".into(),
            description: Some("Test your understanding of Java basics".into()),
            questions: vec![
                QuizQuestion {
                    id: "qst-00000001".into(),
                    question: "What is Java?".into(),
                    options: options([
                        "A programming language",
                        "A coffee brand",
                        "An operating system",
                        "A database",
                    ]),
                    correct_answer: 0,
                    points: 10,
                },
                QuizQuestion {
                    id: "qst-00000002".into(),
                    question: "Which keyword is used to declare a variable in Java?".into(),
                    options: options(["var", "let", "int", "variable"]),
                    correct_answer: 2,
                    points: 10,
                },
            ],
            time_limit_minutes: 30,
            passing_score: 70,
            created_at: now,
        }];

        for course in &mut courses {
            course.lesson_count = u32::try_from(
                lessons.iter().filter(|l| l.course_id == course.id).count(),
            )
            .unwrap_or(u32::MAX);
        }

        Self {
            courses,
            lessons,
            assignments,
            quizzes,
        }
    }
}

impl KomplexService {
    /// Write the demo catalog if the store has never held a course list.
    /// Returns whether anything was written. The trail is not written to.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn seed_demo_catalog(&mut self) -> Result<bool, DatabaseError> {
        let keys = self.db().keys().clone();
        if self.db().kv().contains(&keys.courses()) {
            return Ok(false);
        }

        let catalog = DemoCatalog::build(Utc::now());
        let db = self.db_mut();
        db.write_json(&keys.lessons(), &catalog.lessons)?;
        db.write_json(&keys.assignments(), &catalog.assignments)?;
        db.write_json(&keys.quizzes(), &catalog.quizzes)?;
        db.write_json(&keys.enrollments(), &Vec::<Enrollment>::new())?;
        db.write_json(&keys.courses(), &catalog.courses)?;

        tracing::info!(courses = catalog.courses.len(), "seeded demo catalog");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_counts_are_consistent() {
        let catalog = DemoCatalog::build(Utc::now());
        assert_eq!(catalog.courses.len(), 3);
        assert_eq!(catalog.lessons.len(), 2);
        assert_eq!(catalog.assignments.len(), 2);
        assert_eq!(catalog.quizzes.len(), 1);
        for course in &catalog.courses {
            let lessons = catalog
                .lessons
                .iter()
                .filter(|l| l.course_id == course.id)
                .count();
            assert_eq!(course.lesson_count as usize, lessons);
            assert_eq!(course.student_count, 0);
        }
    }

    #[test]
    fn demo_questions_are_valid() {
        let catalog = DemoCatalog::build(Utc::now());
        for question in catalog.quizzes.iter().flat_map(|q| &q.questions) {
            komplex_core::grading::validate_question(question).unwrap();
        }
    }

    #[test]
    fn seeds_only_once() {
        let mut svc = test_service();
        assert!(svc.seed_demo_catalog().unwrap());
        svc.delete_course("crs-00000003").unwrap();
        assert!(!svc.seed_demo_catalog().unwrap());
        assert_eq!(svc.list_courses().len(), 2);
    }

    #[test]
    fn empty_course_list_is_not_reseeded() {
        let mut svc = test_service();
        svc.db_mut().write_json("komplex_courses", &Vec::<Course>::new()).unwrap();
        assert!(!svc.seed_demo_catalog().unwrap());
    }
}
