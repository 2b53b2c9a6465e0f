use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

type Callback = Arc<dyn Fn() + Send + Sync + 'static>;
type Registry = Mutex<BTreeMap<u64, Callback>>;

/// Set of observers notified whenever a store mutates.
///
/// Subscribing returns a [`Subscription`] handle; dropping the handle
/// removes the callback, so a disposed component is never invoked again.
pub struct SubscriberSet {
    registry: Arc<Registry>,
    next_id: Mutex<u64>,
}

impl Default for SubscriberSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Mutex::new(0),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.registry
            .lock()
            .unwrap()
            .insert(id, Arc::new(callback));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Invoke every live subscriber. Callbacks are cloned out of the lock
    /// first so a callback may itself subscribe or unsubscribe.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self.registry.lock().unwrap().values().cloned().collect();
        for cb in callbacks {
            cb();
        }
    }

    pub fn len(&self) -> usize {
        self.registry.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle tying a subscriber's lifetime to its registration.
pub struct Subscription {
    registry: Weak<Registry>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().unwrap().remove(&self.id);
        }
    }
}
