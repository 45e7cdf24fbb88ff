//! Progress engine integration tests.
//!
//! Covers completion idempotence, the weighted formula and its rounding,
//! empty categories, full completion, derived counts, and corrupt data.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use komplex_core::enums::{CompletionKind, CourseLevel};
use komplex_db::repos::assignment::NewAssignment;
use komplex_db::repos::course::NewCourse;
use komplex_db::repos::lesson::NewLesson;
use komplex_db::repos::quiz::{NewQuestion, NewQuiz};
use komplex_db::service::KomplexService;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Course {
    id: String,
    lessons: Vec<String>,
    assignments: Vec<String>,
    quizzes: Vec<String>,
}

fn create_course(svc: &mut KomplexService, lessons: usize, assignments: usize, quizzes: usize) -> Course {
    let course = svc
        .create_course(NewCourse {
            title: "Java Programming Basics".into(),
            description: "Learn Java".into(),
            educator_id: "edu-1".into(),
            educator_name: "Mr. Sophea".into(),
            level: CourseLevel::Beginner,
            image: None,
            category: "Programming".into(),
        })
        .unwrap();

    let lessons = (0..lessons)
        .map(|i| {
            svc.create_lesson(NewLesson {
                course_id: course.id.clone(),
                title: format!("Lesson {i}"),
                ..NewLesson::default()
            })
            .unwrap()
            .id
        })
        .collect();
    let assignments = (0..assignments)
        .map(|i| {
            svc.create_assignment(NewAssignment {
                course_id: course.id.clone(),
                title: format!("Assignment {i}"),
                description: None,
                due_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
                points: 100,
                instructions: None,
            })
            .unwrap()
            .id
        })
        .collect();
    let quizzes = (0..quizzes)
        .map(|i| {
            svc.create_quiz(NewQuiz {
                course_id: course.id.clone(),
                title: format!("Quiz {i}"),
                description: None,
                time_limit_minutes: 30,
                passing_score: 70,
                questions: vec![NewQuestion {
                    question: "What is Java?".into(),
                    options: vec![
                        "A programming language".into(),
                        "A coffee brand".into(),
                        "An operating system".into(),
                        "A database".into(),
                    ],
                    correct_answer: 0,
                    points: 10,
                }],
            })
            .unwrap()
            .id
        })
        .collect();

    Course {
        id: course.id,
        lessons,
        assignments,
        quizzes,
    }
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

#[test]
fn repeated_completion_changes_nothing() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 2, 1);
    svc.enroll(&c.id, "stu-1").unwrap();

    assert!(svc.mark_quiz_complete(&c.id, &c.quizzes[0], "stu-1").unwrap());
    let set = svc.completed_ids(CompletionKind::Quiz, &c.id, "stu-1");
    let enrollment = svc.get_enrollment(&c.id, "stu-1");

    assert!(!svc.mark_quiz_complete(&c.id, &c.quizzes[0], "stu-1").unwrap());
    assert_eq!(svc.completed_ids(CompletionKind::Quiz, &c.id, "stu-1"), set);
    assert_eq!(svc.get_enrollment(&c.id, "stu-1"), enrollment);
}

#[test]
fn calculate_progress_is_deterministic() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 3, 1, 2);
    svc.mark_lesson_complete(&c.id, &c.lessons[1], "stu-1").unwrap();

    let first = svc.calculate_progress(&c.id, "stu-1");
    for _ in 0..5 {
        assert_eq!(svc.calculate_progress(&c.id, "stu-1"), first);
    }
}

// ---------------------------------------------------------------------------
// Weighted formula
// ---------------------------------------------------------------------------

#[test]
fn one_lesson_then_one_assignment() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 2, 1);
    svc.enroll(&c.id, "stu-1").unwrap();

    svc.mark_lesson_complete(&c.id, &c.lessons[0], "stu-1").unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 30);

    // 30 + 12.5 = 42.5 rounds up.
    svc.submit_assignment(&c.assignments[0], "stu-1").unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 43);

    let report = svc.progress_report(&c.id, "stu-1");
    assert_eq!(report.progress, 43);
    assert_eq!(report.breakdown.lessons.completed, 1);
    assert_eq!(report.breakdown.assignments.completed, 1);
    assert_eq!(report.breakdown.quizzes.total, 1);
    assert_eq!(report.enrollment.unwrap().progress, 43);
}

#[test]
fn submit_moves_every_enrolled_student() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 0, 1, 0);
    svc.enroll(&c.id, "stu-1").unwrap();
    svc.enroll(&c.id, "stu-2").unwrap();

    // Assignment status is shared, so stu-2 advances too.
    svc.submit_assignment(&c.assignments[0], "stu-1").unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 25);
    assert_eq!(svc.get_progress(&c.id, "stu-2"), 25);
    assert_eq!(
        svc.get_progress(&c.id, "stu-2"),
        svc.calculate_progress(&c.id, "stu-2")
    );
}

#[test]
fn catalog_changes_recompute_enrolled_students() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 1, 0, 0);
    svc.enroll(&c.id, "stu-1").unwrap();
    svc.enroll(&c.id, "stu-2").unwrap();
    svc.mark_lesson_complete(&c.id, &c.lessons[0], "stu-1").unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 60);

    let added = svc
        .create_lesson(NewLesson {
            course_id: c.id.clone(),
            title: "Lesson 2".into(),
            ..NewLesson::default()
        })
        .unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 30);

    let assignment = svc
        .create_assignment(NewAssignment {
            course_id: c.id.clone(),
            title: "Homework".into(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            points: 10,
            instructions: None,
        })
        .unwrap();
    svc.submit_assignment(&assignment.id, "stu-2").unwrap();
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 55);
    assert_eq!(svc.get_progress(&c.id, "stu-2"), 25);

    svc.delete_lesson(&added.id).unwrap();
    svc.delete_assignment(&assignment.id).unwrap();
    for student in ["stu-1", "stu-2"] {
        assert_eq!(
            svc.get_progress(&c.id, student),
            svc.calculate_progress(&c.id, student),
            "{student} is stale"
        );
    }
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 60);
    assert_eq!(svc.get_progress(&c.id, "stu-2"), 0);
}

#[test]
fn course_without_lessons_or_quizzes() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 0, 2, 0);
    svc.enroll(&c.id, "stu-1").unwrap();

    for id in &c.assignments {
        svc.submit_assignment(id, "stu-1").unwrap();
    }
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 25);
}

#[test]
fn course_without_lessons_caps_at_forty() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 0, 1, 1);
    svc.enroll(&c.id, "stu-1").unwrap();

    svc.submit_assignment(&c.assignments[0], "stu-1").unwrap();
    svc.mark_quiz_complete(&c.id, &c.quizzes[0], "stu-1").unwrap();

    let enrollment = svc.get_enrollment(&c.id, "stu-1").unwrap();
    assert_eq!(enrollment.progress, 40);
    assert!(!enrollment.completed);
}

#[test]
fn full_completion_marks_enrollment_completed() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 2, 1);
    svc.enroll(&c.id, "stu-1").unwrap();

    for id in &c.lessons {
        svc.mark_lesson_complete(&c.id, id, "stu-1").unwrap();
    }
    for id in &c.assignments {
        svc.submit_assignment(id, "stu-1").unwrap();
    }
    svc.submit_quiz(&c.quizzes[0], "stu-1", &[Some(0)]).unwrap();

    let enrollment = svc.get_enrollment(&c.id, "stu-1").unwrap();
    assert_eq!(enrollment.progress, 100);
    assert!(enrollment.completed);
}

#[test]
fn deleted_lesson_stops_counting() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 0, 0);
    svc.mark_lesson_complete(&c.id, &c.lessons[0], "stu-1").unwrap();
    assert_eq!(svc.calculate_progress(&c.id, "stu-1"), 30);

    svc.delete_lesson(&c.lessons[0]).unwrap();
    assert_eq!(svc.calculate_progress(&c.id, "stu-1"), 0);
}

#[test]
fn unknown_course_scores_zero() {
    let mut svc = KomplexService::in_memory();
    svc.mark_lesson_complete("crs-gone", "lsn-1", "stu-1").unwrap();
    assert_eq!(svc.calculate_progress("crs-gone", "stu-1"), 0);
}

// ---------------------------------------------------------------------------
// Derived counts
// ---------------------------------------------------------------------------

#[test]
fn counts_follow_collections() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 3, 0, 0);
    assert_eq!(svc.get_course(&c.id).unwrap().lesson_count, 3);

    svc.enroll(&c.id, "stu-1").unwrap();
    svc.enroll(&c.id, "stu-2").unwrap();
    svc.enroll(&c.id, "stu-1").unwrap();
    assert_eq!(svc.get_course(&c.id).unwrap().student_count, 2);

    svc.delete_lesson(&c.lessons[2]).unwrap();
    let course = svc.get_course(&c.id).unwrap();
    assert_eq!(course.lesson_count, 2);
    assert_eq!(course.student_count, 2);
}

#[test]
fn course_delete_cascades_catalog_but_keeps_enrollments() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 2, 1);
    svc.enroll(&c.id, "stu-1").unwrap();
    svc.mark_lesson_complete(&c.id, &c.lessons[0], "stu-1").unwrap();

    assert!(svc.delete_course(&c.id).unwrap());
    assert!(svc.list_lessons(&c.id).is_empty());
    assert!(svc.list_assignments(&c.id).is_empty());
    assert!(svc.list_quizzes(&c.id).is_empty());
    assert_eq!(svc.enrollments_by_course(&c.id).len(), 1);
    assert_eq!(
        svc.completed_ids(CompletionKind::Lesson, &c.id, "stu-1"),
        vec![c.lessons[0].clone()]
    );
}

// ---------------------------------------------------------------------------
// Corrupt data
// ---------------------------------------------------------------------------

#[test]
fn corrupt_values_read_as_empty() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 2, 0, 0);
    svc.enroll(&c.id, "stu-1").unwrap();

    let key = svc
        .db()
        .keys()
        .completed(CompletionKind::Lesson, "stu-1", &c.id);
    svc.db_mut().kv_mut().set(&key, "not json".into()).unwrap();
    assert!(svc.completed_ids(CompletionKind::Lesson, &c.id, "stu-1").is_empty());
    assert_eq!(svc.calculate_progress(&c.id, "stu-1"), 0);

    // A completion after corruption starts a fresh set.
    assert!(svc.mark_lesson_complete(&c.id, &c.lessons[0], "stu-1").unwrap());
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 30);

    let key = svc.db().keys().enrollments();
    svc.db_mut().kv_mut().set(&key, "{broken".into()).unwrap();
    assert!(svc.get_enrollment(&c.id, "stu-1").is_none());
    assert_eq!(svc.get_progress(&c.id, "stu-1"), 0);
}

#[test]
fn undecodable_records_survive_unrelated_writes() {
    let mut svc = KomplexService::in_memory();
    let c = create_course(&mut svc, 1, 0, 0);

    let legacy = serde_json::json!({
        "id": "2",
        "courseId": c.id,
        "title": "Variables and Data Types",
        "order": 2.5,
        "createdAt": "2025-01-10T08:00:00.000Z"
    });
    let key = svc.db().keys().lessons();
    let raw = svc.db().kv().get(&key).unwrap();
    let mut values: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    values.push(legacy.clone());
    svc.db_mut()
        .kv_mut()
        .set(&key, serde_json::to_string(&values).unwrap())
        .unwrap();

    assert_eq!(svc.list_lessons(&c.id).len(), 1);

    svc.create_lesson(NewLesson {
        course_id: c.id.clone(),
        title: "Loops".into(),
        ..NewLesson::default()
    })
    .unwrap();
    svc.delete_lesson(&c.lessons[0]).unwrap();

    let stored: Vec<serde_json::Value> =
        serde_json::from_str(&svc.db().kv().get(&key).unwrap()).unwrap();
    assert!(stored.contains(&legacy), "legacy lesson was dropped: {stored:?}");
    assert_eq!(svc.list_lessons(&c.id).len(), 1);
}
