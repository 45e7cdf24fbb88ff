use serde::Serialize;

use komplex_core::entities::Enrollment;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompleteArgs;
use crate::cli::subcommands::CompletionTarget;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CompleteResponse {
    item_id: String,
    /// False when the item was already in the completion set.
    inserted: bool,
    progress: u8,
    enrollment: Option<Enrollment>,
}

/// Handle `komplex complete`.
pub fn handle(args: &CompleteArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inserted = match args.kind {
        CompletionTarget::Lesson => {
            ctx.service
                .mark_lesson_complete(&args.course, &args.item_id, &args.student)?
        }
        CompletionTarget::Quiz => {
            ctx.service
                .mark_quiz_complete(&args.course, &args.item_id, &args.student)?
        }
    };
    output(
        &CompleteResponse {
            item_id: args.item_id.clone(),
            inserted,
            progress: ctx.service.get_progress(&args.course, &args.student),
            enrollment: ctx.service.get_enrollment(&args.course, &args.student),
        },
        flags.format,
    )
}
