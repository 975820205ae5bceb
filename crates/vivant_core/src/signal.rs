//! Push-based signal store
//!
//! Signals hold a type-erased value and a version counter. Writing a signal
//! notifies its subscribers synchronously, in subscription order. There is no
//! derived/effect layer: the engine only needs a handful of booleans whose
//! changes fan out to renderers and loggers.
//!
//! # State
//!
//! [`State<T>`] binds a signal to a [`SharedSignalGraph`] and is the handle the
//! rest of the workspace passes around.
//!
//! ```rust
//! use vivant_core::signal::{SignalGraph, State};
//!
//! let graph = SignalGraph::shared();
//! let open: State<bool> = State::create(&graph, false);
//!
//! open.set(true);
//! assert!(open.get());
//! ```
//!
//! Subscriber callbacks run while the graph is locked; they must not read or
//! write signals through a [`State`] of the same graph.

use crate::sync::lock;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
    /// Unique identifier for a subscription
    pub struct SubscriptionId;
}

/// A typed signal handle (cheap to copy)
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.id).finish()
    }
}

impl<T> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }
}

type Callback = Box<dyn Fn(&dyn Any) + Send>;

struct SignalNode {
    value: Box<dyn Any + Send>,
    version: u64,
    subscribers: SmallVec<[SubscriptionId; 4]>,
}

/// Owner of all signal values and subscriptions
pub struct SignalGraph {
    signals: SlotMap<SignalId, SignalNode>,
    callbacks: SlotMap<SubscriptionId, Callback>,
    owners: FxHashMap<SubscriptionId, SignalId>,
    writes: u64,
}

/// Shared signal graph for cross-component access
pub type SharedSignalGraph = Arc<Mutex<SignalGraph>>;

impl SignalGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            callbacks: SlotMap::with_key(),
            owners: FxHashMap::default(),
            writes: 0,
        }
    }

    /// Create an empty graph behind a shared lock
    pub fn shared() -> SharedSignalGraph {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
            subscribers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: PhantomData,
        }
    }

    /// Current value, `None` if the signal was disposed
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Write a value and notify subscribers
    ///
    /// Returns `false` if the signal no longer exists.
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) -> bool {
        let Some(node) = self.signals.get_mut(signal.id) else {
            return false;
        };
        node.value = Box::new(value);
        node.version += 1;
        self.writes += 1;
        self.notify(signal.id);
        true
    }

    /// Write a value only if it differs from the current one
    ///
    /// Returns `true` if the value changed.
    pub fn set_if_changed<T: PartialEq + Send + 'static>(
        &mut self,
        signal: Signal<T>,
        value: T,
    ) -> bool {
        let unchanged = self
            .signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>())
            .is_some_and(|current| *current == value);

        if unchanged {
            return false;
        }
        self.set(signal, value)
    }

    /// Version counter of a signal (bumped on every write)
    pub fn version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|node| node.version)
    }

    /// Subscribe to writes of a signal
    pub fn subscribe<T, F>(&mut self, signal: Signal<T>, callback: F) -> Option<SubscriptionId>
    where
        T: 'static,
        F: Fn(&T) + Send + 'static,
    {
        let node = self.signals.get_mut(signal.id)?;
        let id = self.callbacks.insert(Box::new(move |value: &dyn Any| {
            if let Some(value) = value.downcast_ref::<T>() {
                callback(value);
            }
        }));
        node.subscribers.push(id);
        self.owners.insert(id, signal.id);
        Some(id)
    }

    /// Remove a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(owner) = self.owners.remove(&id) else {
            return false;
        };
        if let Some(node) = self.signals.get_mut(owner) {
            node.subscribers.retain(|s| *s != id);
        }
        self.callbacks.remove(id).is_some()
    }

    /// Dispose of a signal and all of its subscriptions
    pub fn dispose<T>(&mut self, signal: Signal<T>) -> bool {
        let Some(node) = self.signals.remove(signal.id) else {
            return false;
        };
        for sub in node.subscribers {
            self.owners.remove(&sub);
            self.callbacks.remove(sub);
        }
        true
    }

    /// Whether a signal is still alive
    pub fn contains(&self, id: SignalId) -> bool {
        self.signals.contains_key(id)
    }

    fn notify(&self, id: SignalId) {
        let Some(node) = self.signals.get(id) else {
            return;
        };
        let value: &dyn Any = &*node.value;
        for sub in &node.subscribers {
            if let Some(callback) = self.callbacks.get(*sub) {
                callback(value);
            }
        }
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> SignalStats {
        SignalStats {
            signal_count: self.signals.len(),
            subscription_count: self.callbacks.len(),
            writes: self.writes,
        }
    }
}

impl Default for SignalGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the signal graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalStats {
    pub signal_count: usize,
    pub subscription_count: usize,
    pub writes: u64,
}

/// A signal bound to its graph
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    graph: SharedSignalGraph,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Wrap an existing signal
    pub fn new(signal: Signal<T>, graph: SharedSignalGraph) -> Self {
        Self { signal, graph }
    }

    /// Create a signal in `graph` and bind it
    pub fn create(graph: &SharedSignalGraph, initial: T) -> Self {
        let signal = lock(graph).create_signal(initial);
        Self::new(signal, Arc::clone(graph))
    }

    /// Current value, or the default once the signal is disposed
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    /// Current value, `None` once the signal is disposed
    pub fn try_get(&self) -> Option<T> {
        lock(&self.graph).get(self.signal)
    }

    /// Write a value and notify subscribers
    pub fn set(&self, value: T) -> bool {
        lock(&self.graph).set(self.signal, value)
    }

    /// Write a value only if it changed
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        lock(&self.graph).set_if_changed(self.signal, value)
    }

    /// Subscribe to writes
    pub fn subscribe<F>(&self, callback: F) -> Option<SubscriptionId>
    where
        F: Fn(&T) + Send + 'static,
    {
        lock(&self.graph).subscribe(self.signal, callback)
    }

    /// Remove a subscription made through [`State::subscribe`]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.graph).unsubscribe(id)
    }

    /// Dispose of the underlying signal
    pub fn dispose(&self) -> bool {
        lock(&self.graph).dispose(self.signal)
    }

    /// The underlying signal
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }

    /// The graph this state lives in
    pub fn graph(&self) -> &SharedSignalGraph {
        &self.graph
    }
}

impl<T> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("signal", &self.signal).finish()
    }
}
