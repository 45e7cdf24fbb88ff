use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CourseLevel;

/// A course owned by an educator.
///
/// `lesson_count` and `student_count` are derived caches. The service rewrites
/// them from the lesson and enrollment collections whenever those change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub educator_id: String,
    #[serde(default)]
    pub educator_name: String,
    pub level: CourseLevel,
    #[serde(rename = "students", default)]
    pub student_count: u32,
    #[serde(rename = "lessons", default)]
    pub lesson_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
}
