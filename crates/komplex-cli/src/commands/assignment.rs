use komplex_core::enums::{AssignmentStatus, EntityType};
use komplex_db::repos::assignment::NewAssignment;
use komplex_db::updates::AssignmentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssignmentCommands;
use crate::commands::course::DeleteResponse;
use crate::commands::shared::lookup::require;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}

/// Handle `komplex assignment`.
pub fn handle(
    action: &AssignmentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssignmentCommands::Create {
            course,
            title,
            due,
            points,
            description,
            instructions,
        } => {
            let assignment = ctx.service.create_assignment(NewAssignment {
                course_id: course.clone(),
                title: title.clone(),
                description: description.clone(),
                due_date: parse_date(due, "due date")?,
                points: *points,
                instructions: instructions.clone(),
            })?;
            output(&assignment, flags.format)
        }
        AssignmentCommands::List { course, status } => {
            let mut assignments = ctx.service.list_assignments(course);
            if let Some(status) = status {
                let wanted: AssignmentStatus = parse_enum(status, "status")?;
                assignments.retain(|a| a.status == wanted);
            }
            output(&assignments, flags.format)
        }
        AssignmentCommands::Get { id } => output(
            &require(ctx.service.get_assignment(id), EntityType::Assignment, id)?,
            flags.format,
        ),
        AssignmentCommands::Update {
            id,
            title,
            description,
            due,
            points,
            instructions,
        } => {
            let mut builder = AssignmentUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(non_empty(description));
            }
            if let Some(due) = due {
                builder = builder.due_date(parse_date(due, "due date")?);
            }
            if let Some(points) = points {
                builder = builder.points(*points);
            }
            if let Some(instructions) = instructions {
                builder = builder.instructions(non_empty(instructions));
            }
            let updated = ctx.service.update_assignment(id, &builder.build())?;
            output(&require(updated, EntityType::Assignment, id)?, flags.format)
        }
        AssignmentCommands::Delete { id } => {
            let deleted = ctx.service.delete_assignment(id)?;
            output(
                &DeleteResponse {
                    id: id.clone(),
                    deleted,
                },
                flags.format,
            )
        }
        AssignmentCommands::Submit { id, student } => {
            let submitted = ctx.service.submit_assignment(id, student)?;
            output(&require(submitted, EntityType::Assignment, id)?, flags.format)
        }
        AssignmentCommands::Grade { id, grade } => {
            let graded = ctx.service.grade_assignment(id, *grade)?;
            output(&require(graded, EntityType::Assignment, id)?, flags.format)
        }
    }
}
