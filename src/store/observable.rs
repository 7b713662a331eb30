//! Observable state cell.
//!
//! Holds the current value behind a lock and pushes a snapshot to every
//! broadcast subscriber and registered listener after each write. Readers may
//! also poll the latest value without subscribing.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

/// Snapshot buffer per subscriber before lagging receivers drop old values.
const CHANNEL_CAPACITY: usize = 64;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Thread-safe state container with change notifications.
pub struct Observable<S> {
    state: RwLock<S>,
    tx: broadcast::Sender<S>,
    listeners: RwLock<Vec<Listener<S>>>,
}

impl<S> Observable<S>
where
    S: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(initial: S) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(initial),
            tx,
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> S {
        self.state.read().clone()
    }

    /// Borrow the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.read())
    }

    /// Mutate the value in place and notify.
    ///
    /// Listeners run after the write lock is released, so they may read the
    /// cell again.
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = f(&mut state);
            (result, state.clone())
        };
        self.notify(&snapshot);
        result
    }

    /// Replace the value wholesale and notify.
    pub fn replace(&self, value: S) {
        self.update(|state| *state = value);
    }

    /// Receive a snapshot after every subsequent write.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<S> {
        self.tx.subscribe()
    }

    /// Register a synchronous listener invoked after every subsequent write.
    pub fn on_change(&self, listener: impl Fn(&S) + Send + Sync + 'static) {
        self.listeners.write().push(Arc::new(listener));
    }

    fn notify(&self, snapshot: &S) {
        let listeners: Vec<Listener<S>> = self.listeners.read().clone();
        for listener in &listeners {
            listener(snapshot);
        }
        // No receivers is fine
        let _ = self.tx.send(snapshot.clone());
    }
}

impl<S> Default for Observable<S>
where
    S: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
