//! Lesson repository. Every create and delete recounts the owning course.

use chrono::Utc;
use serde::Serialize;

use komplex_core::entities::Lesson;
use komplex_core::enums::{EntityType, TrailOp};
use komplex_core::ids::PREFIX_LESSON;
use komplex_core::trail::CATALOG_ACTOR;

use crate::error::DatabaseError;
use crate::service::KomplexService;
use crate::updates::lesson::LessonUpdate;

/// Input for [`KomplexService::create_lesson`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewLesson {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub video_ref: String,
    /// Position in the course. Defaults to one past the current highest.
    pub order: Option<u32>,
    pub resources: Vec<String>,
}

impl KomplexService {
    pub(crate) fn read_lessons(&self) -> Vec<Lesson> {
        self.db().read_list(&self.db().keys().lessons())
    }

    fn write_lessons(&mut self, lessons: &[Lesson]) -> Result<(), DatabaseError> {
        let key = self.db().keys().lessons();
        self.db_mut().write_list(&key, lessons)
    }

    /// Create a lesson and recount the course's lessons.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn create_lesson(&mut self, new: NewLesson) -> Result<Lesson, DatabaseError> {
        let mut lessons = self.read_lessons();
        let order = new.order.unwrap_or_else(|| {
            lessons
                .iter()
                .filter(|l| l.course_id == new.course_id)
                .map(|l| l.order)
                .max()
                .map_or(1, |max| max.saturating_add(1))
        });

        let lesson = Lesson {
            id: self.db().generate_id(PREFIX_LESSON)?,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            video_ref: new.video_ref,
            order,
            resources: new.resources,
            created_at: Utc::now(),
        };
        lessons.push(lesson.clone());
        self.write_lessons(&lessons)?;
        self.refresh_course_counts(&lesson.course_id)?;

        self.record(CATALOG_ACTOR, TrailOp::Create, EntityType::Lesson, &lesson.id, &lesson);
        self.catalog_changed(&lesson.course_id)?;
        Ok(lesson)
    }

    #[must_use]
    pub fn get_lesson(&self, id: &str) -> Option<Lesson> {
        self.read_lessons().into_iter().find(|l| l.id == id)
    }

    /// Lessons of a course in playback order.
    #[must_use]
    pub fn list_lessons(&self, course_id: &str) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .read_lessons()
            .into_iter()
            .filter(|l| l.course_id == course_id)
            .collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    /// Apply a partial update. Returns `None` for an unknown lesson.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write fails.
    pub fn update_lesson(
        &mut self,
        id: &str,
        update: &LessonUpdate,
    ) -> Result<Option<Lesson>, DatabaseError> {
        let mut lessons = self.read_lessons();
        let Some(lesson) = lessons.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        if update.is_empty() {
            return Ok(Some(lesson.clone()));
        }
        update.apply(lesson);
        let updated = lesson.clone();
        self.write_lessons(&lessons)?;

        self.record(CATALOG_ACTOR, TrailOp::Update, EntityType::Lesson, id, update);
        Ok(Some(updated))
    }

    /// Delete a lesson and recount its course. Completion sets that still
    /// name the lesson stop counting it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a store write fails.
    pub fn delete_lesson(&mut self, id: &str) -> Result<bool, DatabaseError> {
        let mut lessons = self.read_lessons();
        let Some(pos) = lessons.iter().position(|l| l.id == id) else {
            return Ok(false);
        };
        let removed = lessons.remove(pos);
        self.write_lessons(&lessons)?;
        self.refresh_course_counts(&removed.course_id)?;

        self.record(
            CATALOG_ACTOR,
            TrailOp::Delete,
            EntityType::Lesson,
            id,
            &serde_json::json!({ "course_id": removed.course_id }),
        );
        self.catalog_changed(&removed.course_id)?;
        Ok(true)
    }
}
