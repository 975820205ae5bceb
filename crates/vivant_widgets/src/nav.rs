//! Navigation shell
//!
//! The shell combines two independent axes:
//!
//! - **Style**: [`NavStyle::Transparent`] at the top of the page,
//!   [`NavStyle::Solid`] once the page is scrolled past a small threshold
//! - **Menu**: the mobile menu, a modal overlay that suspends page scrolling
//!   while it is open
//!
//! The menu follows a two-state machine:
//!
//! ```text
//!            Toggle / Open
//!   Closed ─────────────────→ Open
//!      ↑                        │
//!      └────────────────────────┘
//!   Toggle / Close / Escape / BackdropClick / SelectLink
//! ```
//!
//! Entering `Open` takes a hold on the page [`ScrollLock`]; leaving it, or
//! dropping the shell, gives the hold back.

use crate::transitions::StateTransitions;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vivant_core::scroll::{ScrollSource, ScrollTracker};
use vivant_core::scroll_lock::{ScrollLock, ScrollLockGuard};
use vivant_core::signal::{SharedSignalGraph, State};

// =============================================================================
// Entries
// =============================================================================

/// One navigation link
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavEntry {
    /// Link text
    pub label: String,
    /// Target section id, without the leading `#`
    pub anchor: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: anchor.into(),
        }
    }

    /// Fragment href, e.g. `#products`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Instruction for the host after a link is chosen
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "anchor", rename_all = "kebab-case")]
pub enum Navigation {
    /// Scroll to the element with this id; no-op if there is none
    ScrollTo(String),
}

// =============================================================================
// Style
// =============================================================================

/// Visual variant of the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavStyle {
    /// Over the hero, no background
    #[default]
    Transparent,
    /// Scrolled, opaque background with shadow
    Solid,
}

impl NavStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            NavStyle::Transparent => "nav nav--transparent",
            NavStyle::Solid => "nav nav--solid",
        }
    }
}

// =============================================================================
// Menu FSM
// =============================================================================

/// Mobile menu state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs to the mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    /// Hamburger button
    Toggle,
    /// Programmatic open
    Open,
    /// Close control inside the menu
    Close,
    /// Click outside the menu panel
    BackdropClick,
    /// A link inside the menu was chosen
    SelectLink,
    /// Escape key
    Escape,
}

impl StateTransitions for MenuState {
    type Event = MenuEvent;

    fn on_event(&self, event: MenuEvent) -> Option<Self> {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle | MenuEvent::Open) => Some(MenuState::Open),
            (
                MenuState::Open,
                MenuEvent::Toggle
                | MenuEvent::Close
                | MenuEvent::BackdropClick
                | MenuEvent::SelectLink
                | MenuEvent::Escape,
            ) => Some(MenuState::Closed),
            _ => None,
        }
    }
}

// =============================================================================
// NavigationShell
// =============================================================================

/// Scroll-aware navigation bar with a modal mobile menu
pub struct NavigationShell {
    entries: Vec<NavEntry>,
    tracker: ScrollTracker,
    menu: State<MenuState>,
    scroll_lock: ScrollLock,
    // Present exactly while the menu is open
    hold: Option<ScrollLockGuard>,
}

impl NavigationShell {
    /// Attach a shell to the page's scroll source
    pub fn new(
        entries: Vec<NavEntry>,
        source: &ScrollSource,
        graph: &SharedSignalGraph,
        scroll_lock: ScrollLock,
        threshold: f32,
    ) -> Self {
        Self {
            entries,
            tracker: ScrollTracker::attach(source, graph, threshold),
            menu: State::create(graph, MenuState::Closed),
            scroll_lock,
            hold: None,
        }
    }

    /// Ordered navigation entries
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Bar variant for the current scroll offset
    pub fn style(&self) -> NavStyle {
        if self.tracker.is_past_threshold() {
            NavStyle::Solid
        } else {
            NavStyle::Transparent
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_state() == MenuState::Open
    }

    /// Menu state as a subscribable signal
    pub fn menu_signal(&self) -> &State<MenuState> {
        &self.menu
    }

    /// Scrolled-past flag as a subscribable signal
    pub fn scrolled_signal(&self) -> &State<bool> {
        self.tracker.state()
    }

    /// Feed one event to the menu; returns whether the state changed
    pub fn dispatch(&mut self, event: MenuEvent) -> bool {
        let current = self.menu_state();
        let Some(next) = current.on_event(event) else {
            return false;
        };

        match next {
            MenuState::Open => {
                if self.hold.is_none() {
                    self.hold = Some(self.scroll_lock.acquire());
                }
            }
            MenuState::Closed => {
                self.hold = None;
            }
        }
        self.menu.set_if_changed(next);
        debug!(?event, from = ?current, to = ?next, "menu transition");
        true
    }

    /// Hamburger button
    pub fn toggle_menu(&mut self) -> bool {
        self.dispatch(MenuEvent::Toggle)
    }

    pub fn open_menu(&mut self) -> bool {
        self.dispatch(MenuEvent::Open)
    }

    /// Close control
    pub fn close_menu(&mut self) -> bool {
        self.dispatch(MenuEvent::Close)
    }

    pub fn backdrop_click(&mut self) -> bool {
        self.dispatch(MenuEvent::BackdropClick)
    }

    pub fn escape(&mut self) -> bool {
        self.dispatch(MenuEvent::Escape)
    }

    /// Choose entry `index`; closes the menu if it is open
    ///
    /// Returns `None` for an index past the end, leaving the menu untouched.
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let anchor = self.entries.get(index)?.anchor.clone();
        Some(self.select_anchor(&anchor))
    }

    /// Follow an arbitrary anchor; closes the menu if it is open
    ///
    /// The anchor is passed through unchecked.
    pub fn select_anchor(&mut self, anchor: &str) -> Navigation {
        self.dispatch(MenuEvent::SelectLink);
        Navigation::ScrollTo(anchor.to_string())
    }
}

impl Drop for NavigationShell {
    fn drop(&mut self) {
        if self.hold.take().is_some() {
            debug!("navigation shell dropped with menu open");
        }
        self.menu.dispose();
    }
}
