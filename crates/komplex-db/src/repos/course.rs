//! Course repository: CRUD, cascade delete, and derived counts.

use chrono::Utc;
use serde::Serialize;

use komplex_core::entities::{Assignment, Course, Enrollment, Lesson, Quiz};
use komplex_core::enums::{CourseLevel, EntityType, TrailOp};
use komplex_core::ids::PREFIX_COURSE;
use komplex_core::trail::CATALOG_ACTOR;

use crate::error::DatabaseError;
use crate::service::KomplexService;
use crate::updates::course::CourseUpdate;

/// Input for [`KomplexService::create_course`].
#[derive(Debug, Clone, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub educator_id: String,
    pub educator_name: String,
    pub level: CourseLevel,
    pub image: Option<String>,
    pub category: String,
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl KomplexService {
    pub(crate) fn read_courses(&self) -> Vec<Course> {
        self.db().read_list(&self.db().keys().courses())
    }

    pub(crate) fn write_courses(&mut self, courses: &[Course]) -> Result<(), DatabaseError> {
        let key = self.db().keys().courses();
        self.db_mut().write_list(&key, courses)
    }

    /// Create a course with zero students and zero lessons.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn create_course(&mut self, new: NewCourse) -> Result<Course, DatabaseError> {
        let course = Course {
            id: self.db().generate_id(PREFIX_COURSE)?,
            title: new.title,
            description: new.description,
            educator_id: new.educator_id,
            educator_name: new.educator_name,
            level: new.level,
            student_count: 0,
            lesson_count: 0,
            image: new.image,
            category: new.category,
            created_at: Utc::now(),
        };

        let mut courses = self.read_courses();
        courses.push(course.clone());
        self.write_courses(&courses)?;

        self.record(CATALOG_ACTOR, TrailOp::Create, EntityType::Course, &course.id, &course);
        tracing::info!(course_id = %course.id, "course created");
        Ok(course)
    }

    #[must_use]
    pub fn get_course(&self, id: &str) -> Option<Course> {
        self.read_courses().into_iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn list_courses(&self) -> Vec<Course> {
        self.read_courses()
    }

    #[must_use]
    pub fn list_courses_by_educator(&self, educator_id: &str) -> Vec<Course> {
        self.read_courses()
            .into_iter()
            .filter(|c| c.educator_id == educator_id)
            .collect()
    }

    /// Apply a partial update. Returns `None` for an unknown course.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn update_course(
        &mut self,
        id: &str,
        update: &CourseUpdate,
    ) -> Result<Option<Course>, DatabaseError> {
        let mut courses = self.read_courses();
        let Some(course) = courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if update.is_empty() {
            return Ok(Some(course.clone()));
        }
        update.apply(course);
        let updated = course.clone();
        self.write_courses(&courses)?;

        self.record(CATALOG_ACTOR, TrailOp::Update, EntityType::Course, id, update);
        Ok(Some(updated))
    }

    /// Delete a course with its lessons, assignments, and quizzes.
    ///
    /// Enrollments and completion sets for the course are left in place;
    /// dashboards skip enrollments whose course is gone.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn delete_course(&mut self, id: &str) -> Result<bool, DatabaseError> {
        let mut courses = self.read_courses();
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Ok(false);
        }
        self.write_courses(&courses)?;

        let keys = self.db().keys().clone();
        let mut lessons: Vec<Lesson> = self.db().read_list(&keys.lessons());
        lessons.retain(|l| l.course_id != id);
        self.db_mut().write_list(&keys.lessons(), &lessons)?;

        let mut assignments: Vec<Assignment> = self.db().read_list(&keys.assignments());
        assignments.retain(|a| a.course_id != id);
        self.db_mut().write_list(&keys.assignments(), &assignments)?;

        let mut quizzes: Vec<Quiz> = self.db().read_list(&keys.quizzes());
        quizzes.retain(|q| q.course_id != id);
        self.db_mut().write_list(&keys.quizzes(), &quizzes)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Delete,
            EntityType::Course,
            id,
            &serde_json::Value::Null,
        );
        tracing::info!(course_id = id, "course deleted with its lessons, assignments, and quizzes");
        Ok(true)
    }

    /// Rewrite `lesson_count` and `student_count` from the lesson and
    /// enrollment collections. A missing course is left alone.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub(crate) fn refresh_course_counts(&mut self, course_id: &str) -> Result<(), DatabaseError> {
        let keys = self.db().keys().clone();
        let lessons: Vec<Lesson> = self.db().read_list(&keys.lessons());
        let enrollments: Vec<Enrollment> = self.db().read_list(&keys.enrollments());

        let lesson_count = count(lessons.iter().filter(|l| l.course_id == course_id).count());
        let student_count = count(
            enrollments
                .iter()
                .filter(|e| e.course_id == course_id)
                .count(),
        );

        let mut courses = self.read_courses();
        let Some(course) = courses.iter_mut().find(|c| c.id == course_id) else {
            return Ok(());
        };
        if course.lesson_count == lesson_count && course.student_count == student_count {
            return Ok(());
        }
        course.lesson_count = lesson_count;
        course.student_count = student_count;
        self.write_courses(&courses)
    }
}
