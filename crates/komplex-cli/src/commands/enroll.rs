use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnrollArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `komplex enroll`. Enrolling twice returns the existing enrollment.
pub fn handle(args: &EnrollArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let enrollment = ctx.service.enroll(&args.course, &args.student)?;
    output(&enrollment, flags.format)
}
