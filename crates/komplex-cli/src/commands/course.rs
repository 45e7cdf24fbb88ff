use serde::Serialize;

use komplex_core::entities::{Assignment, Course, Lesson, Quiz};
use komplex_core::enums::{CourseLevel, EntityType};
use komplex_db::repos::course::NewCourse;
use komplex_db::updates::CourseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CourseDetailResponse {
    course: Course,
    lessons: Vec<Lesson>,
    assignments: Vec<Assignment>,
    quizzes: Vec<Quiz>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

fn parse_level(raw: &str) -> anyhow::Result<CourseLevel> {
    raw.parse::<CourseLevel>().map_err(anyhow::Error::msg)
}

/// Handle `komplex course`.
pub fn handle(
    action: &CourseCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Create {
            title,
            description,
            educator,
            educator_name,
            level,
            category,
            image,
        } => {
            let course = ctx.service.create_course(NewCourse {
                title: title.clone(),
                description: description.clone(),
                educator_id: educator.clone(),
                educator_name: educator_name.clone(),
                level: parse_level(level)?,
                image: image.clone(),
                category: category.clone(),
            })?;
            output(&course, flags.format)
        }
        CourseCommands::List { educator } => {
            let courses = match educator {
                Some(educator) => ctx.service.list_courses_by_educator(educator),
                None => ctx.service.list_courses(),
            };
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(courses, limit), flags.format)
        }
        CourseCommands::Get { id } => {
            let course = require(ctx.service.get_course(id), EntityType::Course, id)?;
            output(
                &CourseDetailResponse {
                    lessons: ctx.service.list_lessons(id),
                    assignments: ctx.service.list_assignments(id),
                    quizzes: ctx.service.list_quizzes(id),
                    course,
                },
                flags.format,
            )
        }
        CourseCommands::Update {
            id,
            title,
            description,
            educator_name,
            level,
            category,
            image,
        } => {
            let mut builder = CourseUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(name) = educator_name {
                builder = builder.educator_name(name);
            }
            if let Some(level) = level {
                builder = builder.level(parse_level(level)?);
            }
            if let Some(category) = category {
                builder = builder.category(category);
            }
            if let Some(image) = image {
                // An empty value clears the image.
                builder = builder.image(Some(image.clone()).filter(|i| !i.is_empty()));
            }
            let updated = ctx.service.update_course(id, &builder.build())?;
            output(&require(updated, EntityType::Course, id)?, flags.format)
        }
        CourseCommands::Delete { id } => {
            let deleted = ctx.service.delete_course(id)?;
            output(
                &DeleteResponse {
                    id: id.clone(),
                    deleted,
                },
                flags.format,
            )
        }
    }
}
