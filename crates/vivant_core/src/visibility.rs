//! One-shot viewport visibility observation
//!
//! A [`VisibilityObserver`] keeps a registry of observed regions. Each
//! registration owns a boolean signal that starts `false` and flips to `true`
//! the first time the visible fraction of the region reaches its threshold.
//! The flip is permanent: once a region triggers, its registration is removed
//! and nothing can write the signal again.
//!
//! Observation is released by dropping the [`ObserverHandle`] (or calling
//! [`ObserverHandle::disconnect`]). Notifications for a released region are
//! silently ignored, which makes late callbacks from the host harmless.
//!
//! Trigger callbacks registered with [`VisibilitySignal::subscribe`] run after
//! the observer has released the registry and the signal graph, so they are
//! free to read any signal, including the one that just flipped.
//!
//! ```rust
//! use vivant_core::geometry::{Rect, Viewport};
//! use vivant_core::signal::SignalGraph;
//! use vivant_core::visibility::VisibilityObserver;
//!
//! let observer = VisibilityObserver::new(SignalGraph::shared());
//! let products = observer.observe(Rect::new(0.0, 2000.0, 1280.0, 1000.0), 0.1);
//!
//! // Scroll far enough for 10% of the section to show
//! observer.process_viewport(&Viewport::new(1300.0, 1280.0, 800.0));
//! assert!(products.signal.get());
//!
//! // Scrolling back up does not hide it again
//! observer.process_viewport(&Viewport::new(0.0, 1280.0, 800.0));
//! assert!(products.signal.get());
//! ```

use crate::geometry::{intersection_ratio, Rect, Viewport};
use crate::signal::{SharedSignalGraph, Signal};
use crate::sync::lock;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

new_key_type! {
    /// Unique identifier for an observed region
    pub struct RegionId;
}

type TriggerCallback = Box<dyn FnOnce(bool) + Send>;

struct Registration {
    bounds: Rect,
    threshold: f32,
    signal: Signal<bool>,
    callbacks: Vec<TriggerCallback>,
}

struct Triggered {
    region: RegionId,
    signal: Signal<bool>,
    callbacks: Vec<TriggerCallback>,
}

impl Triggered {
    fn new(region: RegionId, registration: Registration) -> Self {
        Self {
            region,
            signal: registration.signal,
            callbacks: registration.callbacks,
        }
    }
}

#[derive(Default)]
struct Registry {
    regions: SlotMap<RegionId, Registration>,
}

/// Registry of observed regions sharing one signal graph
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone)]
pub struct VisibilityObserver {
    graph: SharedSignalGraph,
    registry: Arc<Mutex<Registry>>,
}

impl VisibilityObserver {
    /// Create an observer writing its signals into `graph`
    pub fn new(graph: SharedSignalGraph) -> Self {
        Self {
            graph,
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Start observing a region
    ///
    /// `threshold` is the fraction of the region's area that must be visible
    /// to trigger, clamped to `[0, 1]`. A threshold of `0` triggers on any
    /// visible area.
    pub fn observe(&self, bounds: Rect, threshold: f32) -> Observation {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        let signal = lock(&self.graph).create_signal(false);
        let region = lock(&self.registry).regions.insert(Registration {
            bounds,
            threshold,
            signal,
            callbacks: Vec::new(),
        });

        trace!(?region, threshold, "observing region");

        Observation {
            signal: VisibilitySignal {
                signal,
                region,
                graph: Arc::clone(&self.graph),
                registry: Arc::clone(&self.registry),
            },
            handle: ObserverHandle {
                observer: self.clone(),
                region,
                signal,
                released: false,
            },
        }
    }

    /// Move a region after layout
    ///
    /// Returns `false` if the region is released or has already triggered.
    pub fn update_bounds(&self, region: RegionId, bounds: Rect) -> bool {
        match lock(&self.registry).regions.get_mut(region) {
            Some(registration) => {
                registration.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Evaluate every live registration against a viewport
    ///
    /// Returns the number of regions that triggered on this pass.
    pub fn process_viewport(&self, viewport: &Viewport) -> usize {
        let triggered: Vec<Triggered> = {
            let mut registry = lock(&self.registry);
            let hits: Vec<RegionId> = registry
                .regions
                .iter()
                .filter(|(_, r)| meets_threshold(intersection_ratio(&r.bounds, viewport), r.threshold))
                .map(|(id, _)| id)
                .collect();
            hits.into_iter()
                .filter_map(|id| registry.regions.remove(id).map(|r| Triggered::new(id, r)))
                .collect()
        };

        let count = triggered.len();
        self.fire(triggered);
        count
    }

    /// Deliver one intersection notification for a region
    ///
    /// This is the path for hosts whose platform observer computes the ratio
    /// itself. Returns `true` if the region triggered. Notifications for
    /// released or already-triggered regions are ignored.
    pub fn notify(&self, region: RegionId, ratio: f32) -> bool {
        let triggered = {
            let mut registry = lock(&self.registry);
            let Some(registration) = registry.regions.get(region) else {
                trace!(?region, "ignoring notification for released region");
                return false;
            };
            if !meets_threshold(ratio, registration.threshold) {
                return false;
            }
            match registry.regions.remove(region) {
                Some(registration) => Triggered::new(region, registration),
                None => return false,
            }
        };

        self.fire(vec![triggered]);
        true
    }

    /// Whether a region is still waiting to trigger
    pub fn is_observing(&self, region: RegionId) -> bool {
        lock(&self.registry).regions.contains_key(region)
    }

    /// Number of regions still waiting to trigger
    pub fn active_count(&self) -> usize {
        lock(&self.registry).regions.len()
    }

    fn fire(&self, triggered: Vec<Triggered>) {
        if triggered.is_empty() {
            return;
        }
        {
            let mut graph = lock(&self.graph);
            for entry in &triggered {
                debug!(region = ?entry.region, "region entered viewport");
                graph.set(entry.signal, true);
            }
        }
        for entry in triggered {
            for callback in entry.callbacks {
                callback(true);
            }
        }
    }

    fn release(&self, region: RegionId, signal: Signal<bool>) {
        let was_observing = lock(&self.registry).regions.remove(region).is_some();
        lock(&self.graph).dispose(signal);
        trace!(?region, was_observing, "released region");
    }
}

fn meets_threshold(ratio: f32, threshold: f32) -> bool {
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

/// Result of [`VisibilityObserver::observe`]
pub struct Observation {
    /// The monotonic "has been visible" signal
    pub signal: VisibilitySignal,
    /// Disposer for the registration
    pub handle: ObserverHandle,
}

/// Read-only view of a region's "has been visible" flag
#[derive(Clone)]
pub struct VisibilitySignal {
    signal: Signal<bool>,
    region: RegionId,
    graph: SharedSignalGraph,
    registry: Arc<Mutex<Registry>>,
}

impl VisibilitySignal {
    /// Whether the region has ever met its threshold
    ///
    /// Reads `false` once the observation has been released.
    pub fn get(&self) -> bool {
        lock(&self.graph).get(self.signal).unwrap_or(false)
    }

    /// Be told when the region triggers
    ///
    /// The callback runs once at most, after the observer has unlocked the
    /// registry and the signal graph; calling [`VisibilitySignal::get`] from
    /// inside it is fine. Returns `false`, dropping the callback, when the
    /// region has already triggered or been released.
    pub fn subscribe<F>(&self, callback: F) -> bool
    where
        F: FnOnce(bool) + Send + 'static,
    {
        match lock(&self.registry).regions.get_mut(self.region) {
            Some(registration) => {
                registration.callbacks.push(Box::new(callback));
                true
            }
            None => false,
        }
    }

    /// The underlying signal
    pub fn signal(&self) -> Signal<bool> {
        self.signal
    }
}

/// Owns one registration; dropping it stops observation
pub struct ObserverHandle {
    observer: VisibilityObserver,
    region: RegionId,
    signal: Signal<bool>,
    released: bool,
}

impl ObserverHandle {
    /// The observed region
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// Move the observed region after layout
    pub fn update_bounds(&self, bounds: Rect) -> bool {
        !self.released && self.observer.update_bounds(self.region, bounds)
    }

    /// Whether the region is still waiting to trigger
    pub fn is_observing(&self) -> bool {
        !self.released && self.observer.is_observing(self.region)
    }

    /// Release the registration and dispose of its signal
    pub fn disconnect(&mut self) {
        if !self.released {
            self.released = true;
            self.observer.release(self.region, self.signal);
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}
