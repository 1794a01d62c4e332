//! Explicit publish/subscribe subject.
//!
//! An [`Observable`] holds a current value and a list of subscribers. Every
//! published value is delivered to each subscriber that existed at publish
//! time, in publish order, exactly once. Late subscribers read the latest
//! value with [`Observable::get`].

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

struct Inner<T> {
    value: T,
    subscribers: Vec<UnboundedSender<T>>,
}

/// Subject with a current value and ordered change delivery.
///
/// Reads and subscriptions are open to anyone holding a reference. Writes
/// are crate-private so only the owning store can publish.
///
/// # Example
///
/// ```rust
/// use lifelog::store::LogStore;
/// use lifelog::core::TransitionKind;
///
/// let store = LogStore::new();
/// let mut changes = store.subscribe_records();
///
/// store.record(TransitionKind::Created);
///
/// let snapshot = changes.try_next().expect("one change");
/// assert_eq!(snapshot.len(), 1);
/// assert!(changes.try_next().is_none());
/// ```
pub struct Observable<T: Clone> {
    inner: Mutex<Inner<T>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Inner {
                value: initial,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Latest published value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Receive every value published from now on.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.lock().subscribers.push(tx);
        Subscription { rx }
    }

    /// Subscribers still holding their receiving end, as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Replace the value and fan it out.
    pub(crate) fn publish(&self, value: T) {
        let mut inner = self.inner.lock();
        Self::commit(&mut inner, value);
    }

    /// Derive the next value from the current one and publish it, all under
    /// one lock so concurrent writers cannot interleave.
    pub(crate) fn update<F>(&self, next: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut inner = self.inner.lock();
        let value = next(&inner.value);
        Self::commit(&mut inner, value.clone());
        value
    }

    fn commit(inner: &mut Inner<T>, value: T) {
        inner.value = value;
        let current = &inner.value;
        // Closed receivers are pruned here rather than on drop.
        inner
            .subscribers
            .retain(|tx| tx.send(current.clone()).is_ok());
    }
}

/// Receiving end of an [`Observable`] subscription.
///
/// Yields `None` once the subject has been dropped and every pending value
/// has been taken.
pub struct Subscription<T> {
    rx: UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Next pending change, without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Every pending change, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Wait for the next change.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Block the current thread until the next change.
    ///
    /// Must not be called from inside an async runtime.
    pub fn blocking_next(&mut self) -> Option<T> {
        self.rx.blocking_recv()
    }
}
