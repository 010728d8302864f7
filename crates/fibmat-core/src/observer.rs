//! Observer pattern for progress tracking.

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Subject that fans updates out to a collection of observers.
#[derive(Default)]
pub struct ProgressSubject<'a> {
    observers: Vec<&'a dyn ProgressObserver>,
}

impl<'a> ProgressSubject<'a> {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn register(&mut self, observer: &'a dyn ProgressObserver) {
        self.observers.push(observer);
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.len()
    }
}

impl ProgressObserver for ProgressSubject<'_> {
    fn on_progress(&self, update: &ProgressUpdate) {
        for observer in &self.observers {
            observer.on_progress(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::observers::NoOpObserver;

    struct CountingObserver {
        count: Cell<usize>,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                count: Cell::new(0),
            }
        }
    }

    impl ProgressObserver for CountingObserver {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.count.set(self.count.get() + 1);
        }
    }

    #[test]
    fn subject_register_increases_count() {
        let noop = NoOpObserver::new();
        let mut subject = ProgressSubject::new();
        assert_eq!(subject.count(), 0);

        subject.register(&noop);
        subject.register(&noop);
        assert_eq!(subject.count(), 2);
    }

    #[test]
    fn subject_notifies_all_observers() {
        let obs1 = CountingObserver::new();
        let obs2 = CountingObserver::new();
        let mut subject = ProgressSubject::new();
        subject.register(&obs1);
        subject.register(&obs2);

        let update = ProgressUpdate::new("test", 1, 2, 1);
        subject.on_progress(&update);
        assert_eq!(obs1.count.get(), 1);
        assert_eq!(obs2.count.get(), 1);

        subject.on_progress(&update);
        assert_eq!(obs1.count.get(), 2);
        assert_eq!(obs2.count.get(), 2);
    }

    #[test]
    fn subject_empty_does_not_panic() {
        let subject = ProgressSubject::default();
        subject.on_progress(&ProgressUpdate::done("test"));
    }
}
