//! Event sources and the observer boundary.
//!
//! An [`EventSource`] emits transition kinds, one at a time and in order, to
//! a single registered [`TransitionObserver`]. The store is wired to a source
//! through a [`StoreObserver`] held by a scoped [`ObserverRegistration`].

pub mod error;
mod registration;
mod registry;

pub use error::SourceError;
pub use registration::ObserverRegistration;
pub use registry::LifecycleRegistry;

use crate::core::{LifecycleState, TransitionKind};
use crate::store::LogStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Handle identifying a registered observer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ObserverId(Uuid);

impl ObserverId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Receiver of transition events.
pub trait TransitionObserver: Send + Sync {
    /// Called once per event, in the order events occur.
    ///
    /// Implementations must not dispatch back into the source.
    fn on_transition(&self, kind: TransitionKind);
}

/// Authority emitting lifecycle transitions to a single observer.
pub trait EventSource: Send + Sync {
    /// Register `observer`.
    ///
    /// Registering the observer that is already registered returns its
    /// existing id and counts one more hold on it. Registering a different
    /// one while an observer is present fails with
    /// [`SourceError::AlreadyObserved`].
    fn add_observer(&self, observer: Arc<dyn TransitionObserver>)
        -> Result<ObserverId, SourceError>;

    /// Release one hold on `id`; the observer stops receiving events once
    /// every hold is released. Returns `false` if `id` holds nothing.
    fn remove_observer(&self, id: ObserverId) -> bool;

    /// State the component is in right now.
    fn current_state(&self) -> LifecycleState;
}

/// Observer that records every event into a [`LogStore`].
pub struct StoreObserver {
    store: Arc<LogStore>,
}

impl StoreObserver {
    pub fn new(store: Arc<LogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }
}

impl TransitionObserver for StoreObserver {
    fn on_transition(&self, kind: TransitionKind) {
        tracing::debug!(event = %kind, "Observed event");
        self.store.record(kind);
    }
}

/// Wire `store` to `source` for as long as the returned registration lives.
pub fn attach_store(
    source: Arc<dyn EventSource>,
    store: Arc<LogStore>,
) -> Result<ObserverRegistration, SourceError> {
    ObserverRegistration::attach(source, Arc::new(StoreObserver::new(store)))
}
