//! Signal-or-poll watcher behavior under a paused tokio clock.

use std::time::Duration;

use komplex_db::notify::ProgressNotifier;
use komplex_db::service::KomplexService;
use komplex_db::watch::{ProgressWatcher, RefreshCause};

const POLL: Duration = Duration::from_secs(2);

#[tokio::test(start_paused = true)]
async fn first_wake_is_immediate_poll() {
    let notifier = ProgressNotifier::default();
    let mut watcher = ProgressWatcher::new(&notifier, POLL);

    let start = tokio::time::Instant::now();
    assert_eq!(watcher.next().await, RefreshCause::Poll);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn poll_tick_fires_without_signal() {
    let notifier = ProgressNotifier::default();
    let mut watcher = ProgressWatcher::new(&notifier, POLL);
    watcher.next().await;

    let start = tokio::time::Instant::now();
    assert_eq!(watcher.next().await, RefreshCause::Poll);
    assert_eq!(start.elapsed(), POLL);
}

#[tokio::test(start_paused = true)]
async fn signal_wakes_before_poll() {
    let notifier = ProgressNotifier::default();
    let mut watcher = ProgressWatcher::new(&notifier, POLL);
    watcher.next().await;

    let sender = notifier.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        sender.fire();
    });

    let start = tokio::time::Instant::now();
    assert_eq!(watcher.next().await, RefreshCause::Signal);
    assert_eq!(start.elapsed(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn signal_from_service_mutation() {
    let mut svc = KomplexService::in_memory();
    let mut watcher = ProgressWatcher::new(svc.notifier(), POLL);
    watcher.next().await;

    svc.mark_lesson_complete("crs-1", "lsn-1", "stu-1").unwrap();
    assert_eq!(watcher.next().await, RefreshCause::Signal);

    // Repeat completion is silent, so the next wake is the poll.
    svc.mark_lesson_complete("crs-1", "lsn-1", "stu-1").unwrap();
    assert_eq!(watcher.next().await, RefreshCause::Poll);
}

#[tokio::test(start_paused = true)]
async fn closed_notifier_falls_back_to_polling() {
    let notifier = ProgressNotifier::default();
    let mut watcher = ProgressWatcher::new(&notifier, POLL);
    watcher.next().await;
    drop(notifier);

    assert_eq!(watcher.next().await, RefreshCause::Poll);
    assert!(!watcher.is_subscribed());
    assert_eq!(watcher.next().await, RefreshCause::Poll);
}

#[tokio::test(start_paused = true)]
async fn lagged_watcher_reports_signal() {
    let notifier = ProgressNotifier::new(1);
    let mut watcher = ProgressWatcher::new(&notifier, POLL);
    watcher.next().await;

    notifier.fire();
    notifier.fire();
    notifier.fire();
    assert_eq!(watcher.next().await, RefreshCause::Signal);
}

#[test]
fn watcher_debug_output_names_its_state() {
    let notifier = ProgressNotifier::default();
    let watcher = ProgressWatcher::new(&notifier, POLL);
    let rendered = format!("{watcher:?}");
    assert!(rendered.starts_with("ProgressWatcher"));
    assert!(rendered.contains("poll: None"));
}
