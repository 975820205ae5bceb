//! Scroll event dispatch and threshold tracking
//!
//! [`ScrollSource`] stands in for the page's scroll event target: the host
//! calls [`ScrollSource::dispatch`] on every scroll notification and each
//! registered listener runs synchronously with the new offset.
//!
//! [`ScrollTracker`] is the one listener the engine needs: it keeps a boolean
//! signal equal to `scroll_y > threshold` and detaches itself on drop.

use crate::signal::{SharedSignalGraph, State};
use crate::sync::lock;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

new_key_type! {
    /// Unique identifier for a scroll listener
    pub struct ListenerId;
}

type Listener = Arc<dyn Fn(f32) + Send + Sync>;

#[derive(Default)]
struct SourceInner {
    offset: f32,
    listeners: SlotMap<ListenerId, Listener>,
}

/// The page's scroll event target
#[derive(Clone, Default)]
pub struct ScrollSource {
    inner: Arc<Mutex<SourceInner>>,
}

impl ScrollSource {
    /// Create a source at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        lock(&self.inner).listeners.insert(Arc::new(listener))
    }

    /// Remove a listener, returning whether it was registered
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        lock(&self.inner).listeners.remove(id).is_some()
    }

    /// Record a new offset and notify every listener
    ///
    /// Listeners run without the source locked, so they may add or remove
    /// listeners; changes apply from the next dispatch.
    pub fn dispatch(&self, scroll_y: f32) {
        let listeners: Vec<Listener> = {
            let mut inner = lock(&self.inner);
            inner.offset = scroll_y;
            inner.listeners.values().cloned().collect()
        };
        trace!(scroll_y, listeners = listeners.len(), "scroll");
        for listener in listeners {
            listener(scroll_y);
        }
    }

    /// Last dispatched offset
    pub fn offset(&self) -> f32 {
        lock(&self.inner).offset
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Tracks whether the page is scrolled past a fixed offset
///
/// Attach once per page; dropping the tracker removes its listener.
pub struct ScrollTracker {
    source: ScrollSource,
    listener: ListenerId,
    past: State<bool>,
    threshold: f32,
}

impl ScrollTracker {
    /// Attach to `source`, writing the flag into `graph`
    ///
    /// The flag is initialized from the source's current offset.
    pub fn attach(source: &ScrollSource, graph: &SharedSignalGraph, threshold: f32) -> Self {
        let past = State::create(graph, source.offset() > threshold);

        let flag = past.clone();
        let listener = source.add_listener(move |scroll_y| {
            if flag.set_if_changed(scroll_y > threshold) {
                debug!(scroll_y, threshold, past = scroll_y > threshold, "scroll threshold crossed");
            }
        });

        Self {
            source: source.clone(),
            listener,
            past,
            threshold,
        }
    }

    /// Whether the last offset is past the threshold
    pub fn is_past_threshold(&self) -> bool {
        self.past.get()
    }

    /// The tracked flag
    pub fn state(&self) -> &State<bool> {
        &self.past
    }

    /// Threshold in pixels
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.source.remove_listener(self.listener);
        self.past.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalGraph;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_threshold_is_strict() {
        let source = ScrollSource::new();
        let tracker = ScrollTracker::attach(&source, &SignalGraph::shared(), 20.0);

        assert!(!tracker.is_past_threshold());
        source.dispatch(20.0);
        assert!(!tracker.is_past_threshold());
        source.dispatch(20.5);
        assert!(tracker.is_past_threshold());
        source.dispatch(0.0);
        assert!(!tracker.is_past_threshold());
    }

    #[test]
    fn test_initial_state_from_offset() {
        let source = ScrollSource::new();
        source.dispatch(400.0);

        let tracker = ScrollTracker::attach(&source, &SignalGraph::shared(), 50.0);
        assert!(tracker.is_past_threshold());
    }

    #[test]
    fn test_only_flips_notify() {
        let source = ScrollSource::new();
        let tracker = ScrollTracker::attach(&source, &SignalGraph::shared(), 20.0);
        let flips = Arc::new(Mutex::new(Vec::new()));

        let flips_clone = flips.clone();
        tracker
            .state()
            .subscribe(move |past| flips_clone.lock().unwrap().push(*past));

        for y in [5.0, 10.0, 30.0, 60.0, 90.0, 15.0, 0.0] {
            source.dispatch(y);
        }
        assert_eq!(*flips.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let source = ScrollSource::new();
        let graph = SignalGraph::shared();
        {
            let _tracker = ScrollTracker::attach(&source, &graph, 20.0);
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
        assert_eq!(lock(&graph).stats().signal_count, 0);

        // Dispatching after teardown is harmless
        source.dispatch(100.0);
    }

    #[test]
    fn test_listener_may_detach_itself() {
        let source = ScrollSource::new();
        let slot: Arc<Mutex<Option<ListenerId>>> = Arc::new(Mutex::new(None));

        let source_clone = source.clone();
        let slot_clone = slot.clone();
        let id = source.add_listener(move |_| {
            if let Some(id) = slot_clone.lock().unwrap().take() {
                source_clone.remove_listener(id);
            }
        });
        *slot.lock().unwrap() = Some(id);

        source.dispatch(1.0);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.offset(), 1.0);
    }
}
