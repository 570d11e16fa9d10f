//! Synchronous broadcast points.
//!
//! The pipeline exposes a handful of fire-and-forget notification points
//! external code may subscribe to. Listeners run synchronously in
//! registration order, and a panicking listener is isolated and logged so it
//! cannot abort the pipeline or starve later listeners.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// An ordered list of listeners for one notification point.
pub struct Broadcast<T> {
    listeners: RwLock<Vec<Listener<T>>>,
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Broadcast<T> {
    /// Creates an empty broadcast point.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Appends a listener. Listeners fire in subscription order.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners.write().push(Arc::new(f));
    }

    /// Returns the number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// Returns true if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Invokes every listener with the given value.
    ///
    /// Return values are not consumed. The listener list is snapshotted
    /// before invocation, so a listener that subscribes further listeners
    /// does not deadlock or affect the current emission.
    pub fn emit(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self.listeners.read().clone();

        for (index, listener) in listeners.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| listener(value))).is_err() {
                warn!(index, "broadcast listener panicked, continuing");
            }
        }
    }
}
