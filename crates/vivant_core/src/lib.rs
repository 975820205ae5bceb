//! Vivant Core
//!
//! Headless primitives behind the Vivant progressive-disclosure engine:
//!
//! - **Signals**: a small push-based signal store with synchronous subscribers
//! - **Visibility**: one-shot, monotonic "has entered the viewport" observation
//! - **Scroll**: scroll event dispatch and a "scrolled past threshold" tracker
//! - **Scroll Lock**: reference-counted page scroll suspension with RAII guards
//! - **Config**: engine tuning constants loadable from TOML
//!
//! The host (a browser binding, a desktop shell, or a test) feeds in geometry
//! and scroll offsets; the engine answers with state.
//!
//! # Example
//!
//! ```rust
//! use vivant_core::geometry::{Rect, Viewport};
//! use vivant_core::signal::SignalGraph;
//! use vivant_core::visibility::VisibilityObserver;
//!
//! let graph = SignalGraph::shared();
//! let observer = VisibilityObserver::new(graph);
//!
//! let about = observer.observe(Rect::new(0.0, 1200.0, 1280.0, 800.0), 0.1);
//! assert!(!about.signal.get());
//!
//! observer.process_viewport(&Viewport::new(900.0, 1280.0, 800.0));
//! assert!(about.signal.get());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod scroll;
pub mod scroll_lock;
pub mod signal;
pub mod sync;
pub mod visibility;

pub use config::EngineConfig;
pub use error::{CoreError, Result};
pub use geometry::{intersection_ratio, Rect, Viewport};
pub use scroll::{ListenerId, ScrollSource, ScrollTracker};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use signal::{SharedSignalGraph, Signal, SignalGraph, SignalId, SignalStats, State, SubscriptionId};
pub use visibility::{Observation, ObserverHandle, RegionId, VisibilityObserver, VisibilitySignal};
