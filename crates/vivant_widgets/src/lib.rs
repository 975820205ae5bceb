//! Vivant Widgets
//!
//! Interactive state machines for the page chrome:
//!
//! - [`nav::NavigationShell`]: scroll-aware navigation bar with a modal mobile
//!   menu that locks page scrolling while open
//! - [`contact::ContactForm`]: contact form inputs plus the
//!   `idle -> submitting -> success | error` submission lifecycle
//! - [`submit::Submitter`]: the seam where a real backend plugs in; ships with
//!   a delay-based [`submit::SimulatedSubmitter`]
//!
//! Both machines implement [`transitions::StateTransitions`], so their
//! transition tables can be tested without any side effects attached.

pub mod contact;
pub mod nav;
pub mod submit;
pub mod transitions;

pub use contact::{ContactFields, ContactForm, Field, FormEvent, Interest, SubmissionPhase, SubmissionTicket};
pub use nav::{MenuEvent, MenuState, NavEntry, NavStyle, Navigation, NavigationShell};
pub use submit::{Ack, SimulatedSubmitter, SubmitError, Submitter};
pub use transitions::StateTransitions;
