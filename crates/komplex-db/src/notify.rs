//! Process-wide "progress changed" broadcast.
//!
//! The signal carries no payload. It means "some enrollment's progress may
//! have changed; re-read it". Delivery is fire-and-forget: observers that are
//! not subscribed when [`ProgressNotifier::fire`] runs never see that signal,
//! which is why views also poll (see [`crate::watch`]).

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Default number of buffered signals per subscriber.
pub const DEFAULT_CAPACITY: usize = 64;

/// The broadcast signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressChanged;

/// Sending half of the broadcast. Cheap to clone; all clones share observers.
#[derive(Debug, Clone)]
pub struct ProgressNotifier {
    tx: broadcast::Sender<ProgressChanged>,
}

impl ProgressNotifier {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Register a new observer. It sees signals fired from now on.
    #[must_use]
    pub fn subscribe(&self) -> ProgressSubscription {
        ProgressSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Broadcast the signal. Returns how many observers it reached; zero
    /// observers is not an error.
    pub fn fire(&self) -> usize {
        self.tx.send(ProgressChanged).unwrap_or_else(|_| {
            tracing::trace!("progress signal fired with no observers");
            0
        })
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ProgressNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// One observer's receiving half. Dropping it unsubscribes.
#[derive(Debug)]
pub struct ProgressSubscription {
    rx: broadcast::Receiver<ProgressChanged>,
}

impl ProgressSubscription {
    /// Wait for the next signal.
    ///
    /// # Errors
    ///
    /// `RecvError::Lagged` if signals were dropped because this observer fell
    /// behind (it should simply re-read), `RecvError::Closed` once every
    /// notifier is gone.
    pub async fn changed(&mut self) -> Result<ProgressChanged, RecvError> {
        self.rx.recv().await
    }

    /// Drain pending signals without waiting. Returns whether any arrived,
    /// counting a lag as an arrival.
    pub fn take_pending(&mut self) -> bool {
        let mut any = false;
        loop {
            match self.rx.try_recv() {
                Ok(ProgressChanged) | Err(TryRecvError::Lagged(_)) => any = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => return any,
            }
        }
    }

    /// Detach from the notifier.
    pub fn unsubscribe(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_without_observers_reaches_nobody() {
        let notifier = ProgressNotifier::default();
        assert_eq!(notifier.fire(), 0);
    }

    #[test]
    fn every_observer_receives_signal() {
        let notifier = ProgressNotifier::default();
        let mut a = notifier.subscribe();
        let mut b = notifier.subscribe();

        assert_eq!(notifier.fire(), 2);
        assert!(a.take_pending());
        assert!(b.take_pending());
        assert!(!a.take_pending());
    }

    #[test]
    fn unsubscribe_detaches() {
        let notifier = ProgressNotifier::default();
        let sub = notifier.subscribe();
        assert_eq!(notifier.observer_count(), 1);

        sub.unsubscribe();
        assert_eq!(notifier.observer_count(), 0);
        assert_eq!(notifier.fire(), 0);
    }

    #[test]
    fn late_subscriber_misses_earlier_signal() {
        let notifier = ProgressNotifier::default();
        let _early = notifier.subscribe();
        notifier.fire();

        let mut late = notifier.subscribe();
        assert!(!late.take_pending());
    }

    #[test]
    fn lag_counts_as_pending() {
        let notifier = ProgressNotifier::new(1);
        let mut sub = notifier.subscribe();
        notifier.fire();
        notifier.fire();
        notifier.fire();
        assert!(sub.take_pending());
    }

    #[tokio::test]
    async fn clones_share_observers() {
        let notifier = ProgressNotifier::default();
        let clone = notifier.clone();
        let mut sub = notifier.subscribe();

        clone.fire();
        assert_eq!(sub.changed().await.unwrap(), ProgressChanged);
    }
}
