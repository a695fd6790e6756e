//! Notification center: synchronous ids, severity-based auto-dismiss,
//! idempotent dismissal.

use std::time::Duration;

use warden::{Notifier, Severity};

#[tokio::test(start_paused = true)]
async fn show_returns_id_synchronously_and_auto_dismisses() {
    let notifier = Notifier::new();

    let id = notifier.show("saved", Severity::Success);
    assert!(id > 0);
    assert_eq!(notifier.active().len(), 1);

    // Success dismisses after 5s.
    tokio::time::sleep(Duration::from_millis(5010)).await;
    assert!(notifier.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn warnings_outlive_info() {
    let notifier = Notifier::new();

    notifier.show("heads up", Severity::Warning);
    notifier.show("fyi", Severity::Info);
    assert_eq!(notifier.active().len(), 2);

    // Info gone at 5s, warning still visible.
    tokio::time::sleep(Duration::from_millis(5010)).await;
    let active = notifier.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].severity, Severity::Warning);

    // Warning gone at 8s.
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(notifier.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ids_are_monotonic_and_order_is_insertion() {
    let notifier = Notifier::new();

    let a = notifier.show("first", Severity::Error);
    let b = notifier.show("second", Severity::Error);
    assert!(b > a);

    let active = notifier.active();
    assert_eq!(active[0].message, "first");
    assert_eq!(active[1].message, "second");
}

#[tokio::test(start_paused = true)]
async fn dismiss_is_idempotent() {
    let notifier = Notifier::new();

    let id = notifier.show("oops", Severity::Error);
    notifier.dismiss(id);
    assert!(notifier.active().is_empty());

    // Dismissing again, or dismissing a never-allocated id, is a no-op.
    notifier.dismiss(id);
    notifier.dismiss(9999);
    assert!(notifier.active().is_empty());
}
