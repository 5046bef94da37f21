//! Change listeners shared by the store and the request executor.

use std::sync::{Arc, Mutex};

use crate::sync::lock;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Cloneable set of change callbacks. Clones share the same set.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Arc<Mutex<ListenerSet>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut set = lock(&self.inner);
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, Arc::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        lock(&self.inner).entries.retain(|(id, _)| *id != subscription.0);
    }

    /// Callbacks run after the set's lock is released, so a listener may subscribe or read state
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = lock(&self.inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_and_unsubscribe() {
        let listeners = Listeners::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let sub = listeners.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        listeners.notify();
        listeners.clone().notify();
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        listeners.unsubscribe(sub);
        listeners.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(listeners.is_empty());
    }
}
