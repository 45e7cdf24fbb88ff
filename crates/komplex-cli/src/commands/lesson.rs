use komplex_core::enums::EntityType;
use komplex_db::repos::lesson::NewLesson;
use komplex_db::updates::LessonUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::commands::course::DeleteResponse;
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

/// Handle `komplex lesson`.
pub fn handle(
    action: &LessonCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::Create {
            course,
            title,
            description,
            video,
            order,
            resources,
        } => {
            let lesson = ctx.service.create_lesson(NewLesson {
                course_id: course.clone(),
                title: title.clone(),
                description: description.clone(),
                video_ref: video.clone(),
                order: *order,
                resources: resources.clone(),
            })?;
            output(&lesson, flags.format)
        }
        LessonCommands::List { course } => output(&ctx.service.list_lessons(course), flags.format),
        LessonCommands::Get { id } => output(
            &require(ctx.service.get_lesson(id), EntityType::Lesson, id)?,
            flags.format,
        ),
        LessonCommands::Update {
            id,
            title,
            description,
            video,
            order,
        } => {
            let mut builder = LessonUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(video) = video {
                builder = builder.video_ref(video);
            }
            if let Some(order) = order {
                builder = builder.order(*order);
            }
            let updated = ctx.service.update_lesson(id, &builder.build())?;
            output(&require(updated, EntityType::Lesson, id)?, flags.format)
        }
        LessonCommands::Delete { id } => {
            let deleted = ctx.service.delete_lesson(id)?;
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
