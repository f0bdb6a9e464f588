//! Observable value cells with poll-based change subscriptions
//!
//! An `Observable` holds a value and a version counter; the version bumps
//! only when a write actually changes the value. A `Subscription` remembers
//! the last version it observed, so polling it yields each change at most
//! once, always carrying the current value. Handles share state via Arc.

use std::sync::{Arc, Mutex};

struct Cell<T> {
    value: T,
    version: u64,
}

/// Writable observable value cell
///
/// Cloning produces another handle to the same cell. All clones observe the
/// same value and version.
pub struct Observable<T> {
    cell: Arc<Mutex<Cell<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + PartialEq> Observable<T> {
    /// Create an observable holding an initial value
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Cell { value, version: 0 })),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.cell.lock().unwrap().value.clone()
    }

    /// Write a new value
    ///
    /// Subscribers are only notified when the value actually changed.
    /// Returns whether it did.
    pub fn set(&self, value: T) -> bool {
        let mut cell = self.cell.lock().unwrap();
        if cell.value == value {
            return false;
        }
        cell.value = value;
        cell.version += 1;
        true
    }

    /// Write a value and notify subscribers even when it is unchanged
    pub fn set_always(&self, value: T) {
        let mut cell = self.cell.lock().unwrap();
        cell.value = value;
        cell.version += 1;
    }

    /// Subscribe to future changes
    ///
    /// The subscription starts caught up: it reports nothing until the next
    /// write after this call.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            seen_version: self.cell.lock().unwrap().version,
        }
    }

    /// Return the current value if it changed since the subscription last
    /// observed it, catching the subscription up
    pub fn poll(&self, subscription: &mut Subscription) -> Option<T> {
        let cell = self.cell.lock().unwrap();
        if cell.version == subscription.seen_version {
            return None;
        }
        subscription.seen_version = cell.version;
        Some(cell.value.clone())
    }

    /// A read-only handle to the same cell
    pub fn read_only(&self) -> ReadOnlyObservable<T> {
        ReadOnlyObservable {
            cell: Arc::clone(&self.cell),
        }
    }
}

/// Read-only view of an observable
///
/// Supports reading and subscribing but not writing; hand these to
/// consumers that must not mutate the state they watch.
pub struct ReadOnlyObservable<T> {
    cell: Arc<Mutex<Cell<T>>>,
}

impl<T> Clone for ReadOnlyObservable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + PartialEq> ReadOnlyObservable<T> {
    /// Read the current value
    pub fn get(&self) -> T {
        self.cell.lock().unwrap().value.clone()
    }

    /// Subscribe to future changes
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            seen_version: self.cell.lock().unwrap().version,
        }
    }

    /// Return the current value if it changed since the subscription last
    /// observed it, catching the subscription up
    pub fn poll(&self, subscription: &mut Subscription) -> Option<T> {
        let cell = self.cell.lock().unwrap();
        if cell.version == subscription.seen_version {
            return None;
        }
        subscription.seen_version = cell.version;
        Some(cell.value.clone())
    }
}

/// Cursor tracking the last version a consumer observed
#[derive(Debug, Clone)]
pub struct Subscription {
    seen_version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_current_value() {
        let cell = Observable::new(3);
        assert_eq!(cell.get(), 3);

        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn subscription_starts_caught_up() {
        let cell = Observable::new(1);
        let mut sub = cell.subscribe();

        assert_eq!(cell.poll(&mut sub), None);
    }

    #[test]
    fn poll_reports_each_change_once() {
        let cell = Observable::new(1);
        let mut sub = cell.subscribe();

        cell.set(2);
        assert_eq!(cell.poll(&mut sub), Some(2));
        assert_eq!(cell.poll(&mut sub), None);
    }

    #[test]
    fn unchanged_write_does_not_notify() {
        let cell = Observable::new(5);
        let mut sub = cell.subscribe();

        assert!(!cell.set(5));
        assert_eq!(cell.poll(&mut sub), None);
    }

    #[test]
    fn set_always_notifies_on_equal_value() {
        let cell = Observable::new(5);
        let mut sub = cell.subscribe();

        cell.set_always(5);
        assert_eq!(cell.poll(&mut sub), Some(5));
    }

    #[test]
    fn burst_of_writes_polls_as_latest_value() {
        let cell = Observable::new(0);
        let mut sub = cell.subscribe();

        cell.set(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(cell.poll(&mut sub), Some(3));
        assert_eq!(cell.poll(&mut sub), None);
    }

    #[test]
    fn read_only_view_tracks_the_writer() {
        let cell = Observable::new("a".to_string());
        let view = cell.read_only();
        let mut sub = view.subscribe();

        cell.set("b".to_string());
        assert_eq!(view.get(), "b");
        assert_eq!(view.poll(&mut sub), Some("b".to_string()));
    }

    #[test]
    fn independent_subscriptions_each_see_the_change() {
        let cell = Observable::new(0);
        let mut first = cell.subscribe();
        let mut second = cell.subscribe();

        cell.set(9);
        assert_eq!(cell.poll(&mut first), Some(9));
        assert_eq!(cell.poll(&mut second), Some(9));
    }
}
