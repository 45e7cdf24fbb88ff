//! Lesson update builder.

use serde::Serialize;

use komplex_core::entities::Lesson;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

impl LessonUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.video_ref.is_none()
            && self.order.is_none()
            && self.resources.is_none()
    }

    pub fn apply(&self, lesson: &mut Lesson) {
        if let Some(title) = &self.title {
            lesson.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            lesson.description.clone_from(description);
        }
        if let Some(video_ref) = &self.video_ref {
            lesson.video_ref.clone_from(video_ref);
        }
        if let Some(order) = self.order {
            lesson.order = order;
        }
        if let Some(resources) = &self.resources {
            lesson.resources.clone_from(resources);
        }
    }
}

pub struct LessonUpdateBuilder(LessonUpdate);

impl LessonUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LessonUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn video_ref(mut self, video_ref: impl Into<String>) -> Self {
        self.0.video_ref = Some(video_ref.into());
        self
    }

    #[must_use]
    pub const fn order(mut self, order: u32) -> Self {
        self.0.order = Some(order);
        self
    }

    #[must_use]
    pub fn resources(mut self, resources: Vec<String>) -> Self {
        self.0.resources = Some(resources);
        self
    }

    #[must_use]
    pub fn build(self) -> LessonUpdate {
        self.0
    }
}

impl Default for LessonUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
