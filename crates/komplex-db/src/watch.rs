//! Signal-or-poll refresh loop for progress views.
//!
//! A [`ProgressWatcher`] wakes whenever the notifier fires or the poll
//! interval elapses, whichever comes first. The poll is the reconciliation
//! path for signals that were missed: fired before the view subscribed,
//! dropped by lag, or sent while the view was being rebuilt. Because
//! progress recompute is deterministic, refreshing on both is harmless.

use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Interval, MissedTickBehavior};

use crate::notify::{ProgressNotifier, ProgressSubscription};

/// Default poll interval for views.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Why the watcher woke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCause {
    /// The notifier fired (or this watcher lagged behind it).
    Signal,
    /// The poll interval elapsed. The very first wake is always a poll, so a
    /// view renders once immediately.
    Poll,
}

#[derive(Debug)]
pub struct ProgressWatcher {
    subscription: Option<ProgressSubscription>,
    period: Duration,
    poll: Option<Interval>,
}

impl ProgressWatcher {
    /// Subscribe to `notifier` now; signals fired after this call are seen.
    ///
    /// The poll timer starts on the first [`Self::next`] call, so this can be
    /// built outside a tokio runtime.
    #[must_use]
    pub fn new(notifier: &ProgressNotifier, period: Duration) -> Self {
        Self {
            subscription: Some(notifier.subscribe()),
            period,
            poll: None,
        }
    }

    /// Whether the signal path is still live. After every notifier is dropped
    /// the watcher keeps polling.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Wait for the next reason to refresh.
    pub async fn next(&mut self) -> RefreshCause {
        let Self {
            subscription,
            period,
            poll,
        } = self;
        let period = *period;
        let poll = poll.get_or_insert_with(|| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        loop {
            let signal = match subscription.as_mut() {
                Some(sub) => tokio::select! {
                    biased;
                    signal = sub.changed() => Some(signal),
                    _ = poll.tick() => None,
                },
                None => {
                    poll.tick().await;
                    None
                }
            };

            match signal {
                None => return RefreshCause::Poll,
                Some(Ok(_)) => {
                    poll.reset();
                    return RefreshCause::Signal;
                }
                Some(Err(RecvError::Lagged(missed))) => {
                    tracing::debug!(missed, "progress watcher lagged, refreshing");
                    poll.reset();
                    return RefreshCause::Signal;
                }
                Some(Err(RecvError::Closed)) => {
                    tracing::debug!("progress notifier closed, falling back to polling");
                    *subscription = None;
                }
            }
        }
    }
}
