//! The log store: owner of the record history and notify flag.
//!
//! The store is the only writer of its state. Readers take whole snapshots
//! (`Arc<RecordHistory>`) or subscribe to receive each new snapshot.

mod observable;

pub use observable::{Observable, Subscription};

use crate::config::TrackerConfig;
use crate::core::{LogRecord, RecordHistory, TransitionKind};
use std::sync::Arc;

/// State holder for one tracking session.
///
/// # Example
///
/// ```rust
/// use lifelog::core::TransitionKind;
/// use lifelog::store::LogStore;
///
/// let store = LogStore::new();
/// assert!(store.notify_on_transition());
///
/// store.record(TransitionKind::Created);
/// store.record(TransitionKind::Started);
///
/// let records = store.records();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records.newest().unwrap().kind(), TransitionKind::Started);
/// ```
pub struct LogStore {
    records: Observable<Arc<RecordHistory>>,
    notify_on_transition: Observable<bool>,
}

impl LogStore {
    /// Empty, unbounded store with notifications enabled.
    pub fn new() -> Self {
        Self::with_history(RecordHistory::new(), true)
    }

    pub fn with_config(config: &TrackerConfig) -> Self {
        let history = match config.max_records {
            Some(limit) => RecordHistory::with_capacity_limit(limit),
            None => RecordHistory::new(),
        };
        Self::with_history(history, config.notify_on_transition)
    }

    fn with_history(history: RecordHistory, notify_on_transition: bool) -> Self {
        Self {
            records: Observable::new(Arc::new(history)),
            notify_on_transition: Observable::new(notify_on_transition),
        }
    }

    /// Record `kind` as happening now.
    ///
    /// The new record is prepended and the resulting snapshot published.
    /// Never fails.
    pub fn record(&self, kind: TransitionKind) {
        let snapshot = self
            .records
            .update(|current| Arc::new(current.record(LogRecord::new(kind))));
        tracing::debug!(event = %kind, total = snapshot.len(), "Recorded transition");
    }

    pub fn set_notify_on_transition(&self, value: bool) {
        self.notify_on_transition.publish(value);
        tracing::debug!(enabled = value, "Notify on transition updated");
    }

    /// Current history snapshot, newest first.
    pub fn records(&self) -> Arc<RecordHistory> {
        self.records.get()
    }

    pub fn notify_on_transition(&self) -> bool {
        self.notify_on_transition.get()
    }

    /// Receive every history snapshot produced after this call.
    pub fn subscribe_records(&self) -> Subscription<Arc<RecordHistory>> {
        self.records.subscribe()
    }

    /// Receive every flag write made after this call.
    pub fn subscribe_notify(&self) -> Subscription<bool> {
        self.notify_on_transition.subscribe()
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}
