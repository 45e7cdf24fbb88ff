use std::path::PathBuf;

use komplex_db::trail::reader::{read_actor, read_all};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Handle `komplex history`.
///
/// Reads the configured trail directory even when recording is currently
/// disabled, so earlier history stays visible. The limit keeps the most
/// recent operations.
pub fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = PathBuf::from(&ctx.config.trail.dir);
    let mut ops = match &args.actor {
        Some(actor) => read_actor(&dir, actor)?,
        None => read_all(&dir)?,
    };
    ops.reverse();
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&apply_limit(ops, limit), flags.format)
}
