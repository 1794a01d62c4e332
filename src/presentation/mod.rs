//! Presentation adapter.
//!
//! A [`Presenter`] consumes store snapshots, raises one transient
//! notification per new record while notifications are enabled, renders the
//! tracker screen and relays the notification toggle back to the store.
//! It runs off the store's write path: recording only enqueues snapshots.

pub mod error;
mod notifier;
mod render;

pub use error::NotifyError;
pub use notifier::{LogNotifier, Notifier};
pub use render::{RenderedRow, Screen};

use crate::core::{LifecycleState, RecordHistory, DEFAULT_TIMESTAMP_FORMAT};
use crate::store::{LogStore, Subscription};
use std::future::Future;
use std::sync::Arc;

/// Counts from one pass over pending snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// New records seen
    pub observed: usize,
    /// Notifications shown
    pub notified: usize,
    /// Notifications the surface refused
    pub failed: usize,
}

impl PumpReport {
    fn merge(&mut self, other: PumpReport) {
        self.observed += other.observed;
        self.notified += other.notified;
        self.failed += other.failed;
    }
}

/// Consumer of a [`LogStore`] that renders it and raises notifications.
///
/// # Example
///
/// ```rust
/// use lifelog::core::{LifecycleState, TransitionKind};
/// use lifelog::presentation::{LogNotifier, Presenter};
/// use lifelog::store::LogStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(LogStore::new());
/// let mut presenter = Presenter::new(store.clone(), LogNotifier);
///
/// store.record(TransitionKind::Created);
/// let report = presenter.pump();
/// assert_eq!(report.notified, 1);
///
/// let screen = presenter.render(LifecycleState::Created);
/// assert_eq!(screen.rows.len(), 1);
/// ```
pub struct Presenter<N: Notifier> {
    store: Arc<LogStore>,
    notifier: N,
    changes: Subscription<Arc<RecordHistory>>,
    timestamp_format: String,
}

impl<N: Notifier> Presenter<N> {
    /// Subscribe to `store`. Only records made after this call notify.
    pub fn new(store: Arc<LogStore>, notifier: N) -> Self {
        let changes = store.subscribe_records();
        Self {
            store,
            notifier,
            changes,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Relay the user's toggle to the store.
    pub fn toggle_notifications(&self, enabled: bool) {
        self.store.set_notify_on_transition(enabled);
    }

    /// Handle every snapshot queued since the last call, without waiting.
    pub fn pump(&mut self) -> PumpReport {
        let mut report = PumpReport::default();
        for snapshot in self.changes.drain() {
            report.merge(self.handle(&snapshot));
        }
        report
    }

    /// Handle snapshots as they arrive until `shutdown` resolves, then
    /// handle whatever is still queued.
    pub async fn run_until<F>(&mut self, shutdown: F) -> PumpReport
    where
        F: Future<Output = ()>,
    {
        let mut report = PumpReport::default();
        let mut shutdown = std::pin::pin!(shutdown);
        loop {
            tokio::select! {
                biased;
                change = self.changes.recv() => match change {
                    Some(snapshot) => report.merge(self.handle(&snapshot)),
                    None => break,
                },
                _ = &mut shutdown => break,
            }
        }
        report.merge(self.pump());
        report
    }

    /// Current screen model.
    pub fn render(&self, current_state: LifecycleState) -> Screen {
        Screen::build(
            current_state,
            self.store.notify_on_transition(),
            &self.store.records(),
            &self.timestamp_format,
        )
    }

    fn handle(&self, snapshot: &RecordHistory) -> PumpReport {
        let mut report = PumpReport::default();
        let Some(newest) = snapshot.newest() else {
            return report;
        };
        report.observed = 1;

        // The flag is read when the snapshot is handled, not when recorded.
        if !self.store.notify_on_transition() {
            return report;
        }

        let message = format!("Event: {}", newest.event_name());
        match self.notifier.notify(&message) {
            Ok(()) => report.notified = 1,
            Err(err) => {
                tracing::warn!(event = %newest.kind(), error = %err, "Transient notification failed");
                report.failed = 1;
            }
        }
        report
    }
}
