use std::time::Duration;

use komplex_db::watch::{ProgressWatcher, RefreshCause};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `komplex dashboard`.
///
/// With `--watch` the dashboard re-renders whenever progress changes in this
/// process or the poll interval elapses; polls reload the store so writes
/// from other processes show up. Ctrl-C stops the loop.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.watch {
        let dashboard = ctx.service.student_dashboard(&args.student)?;
        return output(&dashboard, flags.format);
    }

    let period = args
        .interval_ms
        .map_or_else(|| ctx.config.sync.poll_interval(), Duration::from_millis);
    let mut watcher = ProgressWatcher::new(ctx.service.notifier(), period);
    tracing::debug!(student = %args.student, ?period, "watching dashboard");

    loop {
        let cause = tokio::select! {
            cause = watcher.next() => cause,
            _ = tokio::signal::ctrl_c() => break,
        };
        if cause == RefreshCause::Poll {
            ctx.service.reload_store()?;
        }
        let dashboard = ctx.service.student_dashboard(&args.student)?;
        output(&dashboard, flags.format)?;
    }
    Ok(())
}
