//! Container resize notifications.
//!
//! A [`ResizeBus`] fans a new container width (in pixels) out to every subscriber. Subscribing
//! hands back a [`ResizeSubscription`]; dropping it removes the listener, so a component that
//! holds its subscription for as long as it is mounted is unsubscribed on every teardown path.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type ResizeListener = Arc<Mutex<dyn FnMut(f32) + Send>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, ResizeListener)>,
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcasts container widths to subscribed listeners.
///
/// Listeners run on the emitting thread after the bus lock is released, so they (and whatever
/// they lock) may freely call back into the bus. A listener unsubscribed while an emit is in
/// flight can still receive that one width.
#[derive(Clone, Default)]
pub struct ResizeBus {
    listeners: Arc<Mutex<Listeners>>,
}

impl ResizeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ResizeSubscription
    where
        F: FnMut(f32) + Send + 'static,
    {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        let listener: ResizeListener = Arc::new(Mutex::new(listener));
        listeners.entries.push((id, listener));
        tracing::debug!(id, listeners = listeners.entries.len(), "resize listener subscribed");

        ResizeSubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver `width` to every listener in subscription order. Returns how many were notified.
    pub fn emit(&self, width: f32) -> usize {
        let snapshot: Vec<ResizeListener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &snapshot {
            let mut listener = lock(listener);
            (&mut *listener)(width);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

impl std::fmt::Debug for ResizeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Live subscription on a [`ResizeBus`]; unsubscribes on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl ResizeSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        // Bus already gone: nothing left to detach from.
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let removed = {
            let mut listeners = lock(&listeners);
            listeners
                .entries
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| listeners.entries.remove(index))
        };
        // The listener is dropped outside the lock.
        if removed.is_some() {
            tracing::debug!(id = self.id, "resize listener unsubscribed");
        }
    }
}
