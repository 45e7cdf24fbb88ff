use komplex_core::enums::EntityType;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProgressArgs;
use crate::commands::shared::lookup::require;
use crate::context::AppContext;
use crate::output::output;

/// Handle `komplex progress`.
///
/// `--set` persists a clamped override, `--recompute` rewrites the stored
/// value from the completion data; both require an enrollment. Without
/// either flag the stored value and live breakdown are reported.
pub fn handle(args: &ProgressArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let enrollment_id = format!("{}:{}", args.course, args.student);
    if let Some(value) = args.set {
        let updated = ctx.service.update_progress(&args.course, &args.student, value)?;
        require(updated, EntityType::Enrollment, &enrollment_id)?;
    } else if args.recompute {
        let updated = ctx.service.recompute_progress(&args.course, &args.student)?;
        require(updated, EntityType::Enrollment, &enrollment_id)?;
    }
    output(
        &ctx.service.progress_report(&args.course, &args.student),
        flags.format,
    )
}
