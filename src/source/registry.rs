//! In-process lifecycle event source.

use super::{EventSource, ObserverId, SourceError, TransitionObserver};
use crate::core::{LifecycleState, TransitionKind};
use parking_lot::Mutex;
use std::sync::Arc;

struct Registered {
    id: ObserverId,
    observer: Arc<dyn TransitionObserver>,
    // One per successful `add_observer` not yet matched by a removal.
    holds: usize,
}

/// Event source driven by the host, one component per registry.
///
/// The host reports each lifecycle callback with [`dispatch`], or asks the
/// registry to walk the ladder with [`move_to`]. Events reach the registered
/// observer synchronously, one at a time, in call order. With no observer
/// registered, events only update the current state.
///
/// [`dispatch`]: LifecycleRegistry::dispatch
/// [`move_to`]: LifecycleRegistry::move_to
///
/// # Example
///
/// ```rust
/// use lifelog::core::{LifecycleState, TransitionKind};
/// use lifelog::source::{EventSource, LifecycleRegistry};
///
/// let registry = LifecycleRegistry::new("main");
/// let emitted = registry.move_to(LifecycleState::Resumed).unwrap();
///
/// assert_eq!(
///     emitted,
///     vec![TransitionKind::Created, TransitionKind::Started, TransitionKind::Resumed]
/// );
/// assert_eq!(registry.current_state(), LifecycleState::Resumed);
/// ```
pub struct LifecycleRegistry {
    component: String,
    state: Mutex<LifecycleState>,
    observer: Mutex<Option<Registered>>,
    // Held for the whole of a dispatch so deliveries never interleave.
    dispatching: Mutex<()>,
}

impl LifecycleRegistry {
    /// Registry for a component in the `Initialized` state.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            state: Mutex::new(LifecycleState::Initialized),
            observer: Mutex::new(None),
            dispatching: Mutex::new(()),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn has_observer(&self) -> bool {
        self.observer.lock().is_some()
    }

    /// Report one lifecycle event.
    ///
    /// Any sequence of kinds is accepted. Returns `true` if an observer
    /// received the event.
    pub fn dispatch(&self, kind: TransitionKind) -> bool {
        let _dispatching = self.dispatching.lock();
        self.deliver(kind)
    }

    /// Dispatch the events that move the component to `target`, one rung
    /// at a time. Returns the events emitted.
    ///
    /// The whole walk holds the dispatch lock, so concurrent `dispatch` and
    /// `move_to` calls never interleave with it. A destroyed component cannot
    /// move, and nothing can move back down to `Initialized`.
    pub fn move_to(&self, target: LifecycleState) -> Result<Vec<TransitionKind>, SourceError> {
        let _dispatching = self.dispatching.lock();
        let mut emitted = Vec::new();
        loop {
            let current = *self.state.lock();
            if current == target {
                return Ok(emitted);
            }
            if current.is_final() {
                return Err(SourceError::Destroyed { to: target });
            }
            if target == LifecycleState::Initialized {
                return Err(SourceError::IllegalTarget {
                    from: current,
                    to: target,
                });
            }

            let step = if current < target {
                TransitionKind::up_to(next_up(current))
            } else {
                TransitionKind::down_from(current)
            };

            match step {
                Some(kind) => {
                    self.deliver(kind);
                    emitted.push(kind);
                }
                // Initialized straight to Destroyed emits nothing.
                None => *self.state.lock() = LifecycleState::Destroyed,
            }
        }
    }

    /// Apply and deliver one event. Caller holds `dispatching`.
    fn deliver(&self, kind: TransitionKind) -> bool {
        self.log_callback(kind);

        if let Some(target) = kind.target_state() {
            *self.state.lock() = target;
        }

        // Cloned out so the observer may deregister itself during delivery.
        let observer = self
            .observer
            .lock()
            .as_ref()
            .map(|registered| Arc::clone(&registered.observer));

        match observer {
            Some(observer) => {
                observer.on_transition(kind);
                true
            }
            None => {
                tracing::trace!(component = %self.component, event = %kind, "No observer registered");
                false
            }
        }
    }

    fn log_callback(&self, kind: TransitionKind) {
        let message = match kind {
            TransitionKind::Created => "onCreate: the component is being created",
            TransitionKind::Started => "onStart: the component is becoming visible",
            TransitionKind::Resumed => "onResume: the component is interactive",
            TransitionKind::Paused => "onPause: the component is going into the background",
            TransitionKind::Stopped => "onStop: the component is no longer visible",
            TransitionKind::Destroyed => "onDestroy: the component is being destroyed",
            TransitionKind::Any => "onAny: lifecycle event",
        };
        tracing::debug!(component = %self.component, "{}", message);
    }
}

fn next_up(state: LifecycleState) -> LifecycleState {
    match state {
        LifecycleState::Destroyed | LifecycleState::Initialized => LifecycleState::Created,
        LifecycleState::Created => LifecycleState::Started,
        LifecycleState::Started | LifecycleState::Resumed => LifecycleState::Resumed,
    }
}

impl EventSource for LifecycleRegistry {
    fn add_observer(
        &self,
        observer: Arc<dyn TransitionObserver>,
    ) -> Result<ObserverId, SourceError> {
        let mut slot = self.observer.lock();
        match slot.as_mut() {
            Some(registered) if Arc::ptr_eq(&registered.observer, &observer) => {
                registered.holds += 1;
                Ok(registered.id)
            }
            Some(_) => Err(SourceError::AlreadyObserved),
            None => {
                let id = ObserverId::new();
                *slot = Some(Registered {
                    id,
                    observer,
                    holds: 1,
                });
                Ok(id)
            }
        }
    }

    fn remove_observer(&self, id: ObserverId) -> bool {
        let mut slot = self.observer.lock();
        let Some(registered) = slot.as_mut().filter(|r| r.id == id) else {
            return false;
        };
        registered.holds -= 1;
        if registered.holds == 0 {
            *slot = None;
        }
        true
    }

    fn current_state(&self) -> LifecycleState {
        *self.state.lock()
    }
}
