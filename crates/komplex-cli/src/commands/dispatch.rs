use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Course { action } => commands::course::handle(&action, ctx, flags),
        Commands::Lesson { action } => commands::lesson::handle(&action, ctx, flags),
        Commands::Assignment { action } => commands::assignment::handle(&action, ctx, flags),
        Commands::Quiz { action } => commands::quiz::handle(&action, ctx, flags),
        Commands::Enroll(args) => commands::enroll::handle(&args, ctx, flags),
        Commands::Complete(args) => commands::complete::handle(&args, ctx, flags),
        Commands::Progress(args) => commands::progress::handle(&args, ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
