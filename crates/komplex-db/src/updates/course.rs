//! Course update builder.
//!
//! Student and lesson counts are derived and cannot be set here.

use serde::Serialize;

use komplex_core::entities::Course;
use komplex_core::enums::CourseLevel;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CourseUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.educator_name.is_none()
            && self.level.is_none()
            && self.image.is_none()
            && self.category.is_none()
    }

    pub fn apply(&self, course: &mut Course) {
        if let Some(title) = &self.title {
            course.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            course.description.clone_from(description);
        }
        if let Some(name) = &self.educator_name {
            course.educator_name.clone_from(name);
        }
        if let Some(level) = self.level {
            course.level = level;
        }
        if let Some(image) = &self.image {
            course.image.clone_from(image);
        }
        if let Some(category) = &self.category {
            course.category.clone_from(category);
        }
    }
}

pub struct CourseUpdateBuilder(CourseUpdate);

impl CourseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CourseUpdate::default())
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
    pub fn educator_name(mut self, name: impl Into<String>) -> Self {
        self.0.educator_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn level(mut self, level: CourseLevel) -> Self {
        self.0.level = Some(level);
        self
    }

    #[must_use]
    pub fn image(mut self, image: Option<String>) -> Self {
        self.0.image = Some(image);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.0.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CourseUpdate {
        self.0
    }
}

impl Default for CourseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_empty() {
        assert!(CourseUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn serializes_only_set_fields() {
        let update = CourseUpdateBuilder::new()
            .title("Rust 101")
            .image(None)
            .build();
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"title": "Rust 101", "image": null}));
    }
}
