//! # ObserverSet: ordered fan-out over registered observers.
//!
//! [`ObserverSet`] holds the observers of one container and notifies them in
//! registration order. Notification snapshots the list first, so no internal
//! lock is held while observer code runs — observers are free to register
//! further observers or call back into their container.

use std::sync::{Arc, Mutex};

/// Ordered collection of shared observer handles.
///
/// `O` is the (unsized) observer trait object type, e.g.
/// `ObserverSet<dyn ContainerObserver>`.
pub struct ObserverSet<O: ?Sized> {
    list: Mutex<Vec<Arc<O>>>,
}

impl<O: ?Sized> ObserverSet<O> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: Mutex::new(Vec::new()),
        }
    }

    /// Appends an observer. Observers are notified in registration order.
    pub fn add(&self, observer: Arc<O>) {
        self.list.lock().unwrap().push(observer);
    }

    /// Notifies every registered observer.
    ///
    /// The list is snapshotted before the first call; observers added during
    /// notification are picked up from the next event on.
    pub fn notify(&self, f: impl Fn(&O)) {
        let snapshot: Vec<Arc<O>> = self.list.lock().unwrap().clone();
        for observer in &snapshot {
            f(observer);
        }
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.lock().unwrap().is_empty()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.lock().unwrap().len()
    }
}

impl<O: ?Sized> Default for ObserverSet<O> {
    fn default() -> Self {
        Self::new()
    }
}
