//! Pure transition tables

use std::fmt::Debug;
use std::hash::Hash;

/// A finite state machine expressed as a transition function
///
/// `on_event` returns the next state, or `None` when the event is not valid
/// in the current state. Implementations stay free of side effects; the
/// owning widget applies them after a transition is accepted.
///
/// ```rust
/// use vivant_widgets::transitions::StateTransitions;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Door { Open, Closed }
///
/// impl StateTransitions for Door {
///     type Event = bool;
///     fn on_event(&self, push: bool) -> Option<Self> {
///         match (self, push) {
///             (Door::Closed, true) => Some(Door::Open),
///             (Door::Open, false) => Some(Door::Closed),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.on_event(true), Some(Door::Open));
/// assert_eq!(Door::Closed.on_event(false), None);
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Send + Sync + Debug + 'static {
    /// Input alphabet
    type Event: Copy + Debug;

    /// Handle an event and return the new state, or `None` if no transition
    fn on_event(&self, event: Self::Event) -> Option<Self>;
}
