//! Assignment update builder.
//!
//! Status and grade move only through submit and grade operations.

use chrono::NaiveDate;
use serde::Serialize;

use komplex_core::entities::Assignment;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Option<String>>,
}

impl AssignmentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.points.is_none()
            && self.instructions.is_none()
    }

    pub fn apply(&self, assignment: &mut Assignment) {
        if let Some(title) = &self.title {
            assignment.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            assignment.description.clone_from(description);
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(points) = self.points {
            assignment.points = points;
        }
        if let Some(instructions) = &self.instructions {
            assignment.instructions.clone_from(instructions);
        }
    }
}

pub struct AssignmentUpdateBuilder(AssignmentUpdate);

impl AssignmentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AssignmentUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub const fn points(mut self, points: u32) -> Self {
        self.0.points = Some(points);
        self
    }

    #[must_use]
    pub fn instructions(mut self, instructions: Option<String>) -> Self {
        self.0.instructions = Some(instructions);
        self
    }

    #[must_use]
    pub fn build(self) -> AssignmentUpdate {
        self.0
    }
}

impl Default for AssignmentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
