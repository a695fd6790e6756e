//! In-memory notification center with severity-based auto-dismiss.
//!
//! A [`Notifier`] is a cheap-clone handle shared between the transport layer
//! and the UI. The transport raises rate-limit warnings through it; the UI
//! reads [`Notifier::active`] each frame and renders whatever is still alive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Auto-dismiss delay for error/warning notifications.
const LONG_DISMISS: Duration = Duration::from_millis(8000);

/// Auto-dismiss delay for info/success notifications.
const SHORT_DISMISS: Duration = Duration::from_millis(5000);

/// Canonical message shown when the backend reports HTTP 429.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment before trying \
     again. Requests are being throttled to prevent this.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// How long a notification of this severity stays on screen.
    pub fn dismiss_after(self) -> Duration {
        match self {
            Severity::Error | Severity::Warning => LONG_DISMISS,
            Severity::Info | Severity::Success => SHORT_DISMISS,
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: AtomicU64,
    active: Mutex<Vec<Notification>>,
}

/// Handle to the notification center.
///
/// Constructed once at startup and passed explicitly to whoever needs to
/// raise notifications (no global registration slot).
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and schedule its auto-dismiss.
    ///
    /// Returns the allocated id synchronously; the caller is never blocked.
    /// Must be called from within a tokio runtime (the dismiss timer is a
    /// spawned task).
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let notification = Notification {
            id,
            message: message.into(),
            severity,
        };

        self.inner
            .active
            .lock()
            .expect("notification lock poisoned")
            .push(notification);

        let handle = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(severity.dismiss_after()).await;
            handle.dismiss(id);
        });

        id
    }

    /// Remove a notification. Dismissing an unknown id is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.inner
            .active
            .lock()
            .expect("notification lock poisoned")
            .retain(|n| n.id != id);
    }

    /// Snapshot of currently visible notifications, in insertion order.
    pub fn active(&self) -> Vec<Notification> {
        self.inner
            .active
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }

    /// Raise the canonical rate-limit warning.
    pub fn rate_limited(&self) -> u64 {
        self.show(RATE_LIMIT_MESSAGE, Severity::Warning)
    }
}
