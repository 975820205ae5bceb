//! Page scroll lock
//!
//! Suspending page scrolling is a global side effect. [`ScrollLock`] models it
//! as a reference-counted resource: each [`ScrollLockGuard`] holds one count,
//! the page is locked while any guard is alive, and the host hook runs only on
//! the `0 -> 1` and `1 -> 0` edges. Releasing is tied to `Drop`, so every exit
//! path (explicit close, early return, teardown) gives the lock back.
//!
//! ```rust
//! use vivant_core::scroll_lock::ScrollLock;
//!
//! let lock = ScrollLock::new();
//! {
//!     let _guard = lock.acquire();
//!     assert!(lock.is_locked());
//! }
//! assert!(!lock.is_locked());
//! ```

use crate::sync::lock;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::debug;

type LockHook = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct LockInner {
    holders: usize,
    engagements: u64,
}

/// Reference-counted page scroll lock
#[derive(Clone, Default)]
pub struct ScrollLock {
    inner: Arc<Mutex<LockInner>>,
    hook: Option<LockHook>,
}

impl ScrollLock {
    /// Create an unlocked scroll lock with no host hook
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scroll lock that calls `hook(true)` when scrolling is
    /// suspended and `hook(false)` when it is restored
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::default(),
            hook: Some(Arc::new(hook)),
        }
    }

    /// Take one hold on the lock
    pub fn acquire(&self) -> ScrollLockGuard {
        let engaged = {
            let mut inner = lock(&self.inner);
            inner.holders += 1;
            if inner.holders == 1 {
                inner.engagements += 1;
            }
            inner.holders == 1
        };
        if engaged {
            debug!("page scroll locked");
            self.run_hook(true);
        }
        ScrollLockGuard {
            owner: self.clone(),
        }
    }

    /// Whether page scrolling is currently suspended
    pub fn is_locked(&self) -> bool {
        lock(&self.inner).holders > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        lock(&self.inner).holders
    }

    /// How many times the lock went from released to engaged
    pub fn engagements(&self) -> u64 {
        lock(&self.inner).engagements
    }

    fn release(&self) {
        let released = {
            let mut inner = lock(&self.inner);
            inner.holders = inner.holders.saturating_sub(1);
            inner.holders == 0
        };
        if released {
            debug!("page scroll restored");
            self.run_hook(false);
        }
    }

    fn run_hook(&self, locked: bool) {
        if let Some(hook) = &self.hook {
            hook(locked);
        }
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// One hold on a [`ScrollLock`]; released on drop
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    owner: ScrollLock,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.owner.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_guard_releases_on_drop() {
        let scroll_lock = ScrollLock::new();
        let guard = scroll_lock.acquire();
        assert!(scroll_lock.is_locked());
        drop(guard);
        assert!(!scroll_lock.is_locked());
    }

    #[test]
    fn test_reference_counted() {
        let scroll_lock = ScrollLock::new();
        let a = scroll_lock.acquire();
        let b = scroll_lock.acquire();
        assert_eq!(scroll_lock.holders(), 2);

        drop(a);
        assert!(scroll_lock.is_locked());
        drop(b);
        assert!(!scroll_lock.is_locked());
        assert_eq!(scroll_lock.engagements(), 1);
    }

    #[test]
    fn test_hook_runs_on_edges_only() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        let scroll_lock = ScrollLock::with_hook(move |locked| events_clone.lock().unwrap().push(locked));

        let a = scroll_lock.acquire();
        let b = scroll_lock.acquire();
        drop(b);
        drop(a);
        let _c = scroll_lock.acquire();

        assert_eq!(*events.lock().unwrap(), vec![true, false, true]);
    }

    #[test]
    fn test_release_on_unwind() {
        let scroll_lock = ScrollLock::new();
        let cloned = scroll_lock.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = cloned.acquire();
            panic!("teardown");
        }));

        assert!(result.is_err());
        assert!(!scroll_lock.is_locked());
    }
}
