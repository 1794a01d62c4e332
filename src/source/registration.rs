//! Scoped observer registration.

use super::{EventSource, ObserverId, SourceError, TransitionObserver};
use std::sync::Arc;

/// Keeps an observer registered with a source until detached or dropped.
///
/// Detaching is idempotent, and dropping the registration detaches, so the
/// observer is released on every exit path including unwinding.
///
/// # Example
///
/// ```rust
/// use lifelog::core::TransitionKind;
/// use lifelog::source::{LifecycleRegistry, ObserverRegistration, StoreObserver};
/// use lifelog::store::LogStore;
/// use std::sync::Arc;
///
/// let registry = Arc::new(LifecycleRegistry::new("main"));
/// let store = Arc::new(LogStore::new());
///
/// let mut registration = ObserverRegistration::attach(
///     registry.clone(),
///     Arc::new(StoreObserver::new(store.clone())),
/// )
/// .unwrap();
///
/// registry.dispatch(TransitionKind::Created);
/// assert!(registration.detach());
/// assert!(!registration.detach()); // second detach is a no-op
///
/// registry.dispatch(TransitionKind::Started);
/// assert_eq!(store.records().len(), 1);
/// ```
pub struct ObserverRegistration {
    source: Arc<dyn EventSource>,
    id: Option<ObserverId>,
}

impl ObserverRegistration {
    pub fn attach(
        source: Arc<dyn EventSource>,
        observer: Arc<dyn TransitionObserver>,
    ) -> Result<Self, SourceError> {
        let id = source.add_observer(observer)?;
        tracing::debug!(observer = %id, "Observer attached");
        Ok(Self {
            source,
            id: Some(id),
        })
    }

    /// Id while attached, `None` after detaching.
    pub fn id(&self) -> Option<ObserverId> {
        self.id
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// The source this registration was made against.
    pub fn source(&self) -> &Arc<dyn EventSource> {
        &self.source
    }

    /// Release this registration's hold on the observer. Returns `true`
    /// only on the first call.
    pub fn detach(&mut self) -> bool {
        match self.id.take() {
            Some(id) => {
                tracing::debug!(observer = %id, "Removing observer");
                self.source.remove_observer(id)
            }
            None => false,
        }
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        self.detach();
    }
}
