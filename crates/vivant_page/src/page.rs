//! Page composition
//!
//! [`Page`] owns one instance of every engine primitive and wires the content
//! into them:
//!
//! - one [`RevealController`] per section, registered with a shared
//!   [`VisibilityObserver`]
//! - the [`NavigationShell`], listening to the page [`ScrollSource`] and
//!   holding the page [`ScrollLock`] while the mobile menu is open
//! - the marquee strip, the hero typewriter and the [`ContactForm`]
//!
//! The host drives it with geometry ([`Page::resize`], [`Page::layout`]),
//! scroll offsets ([`Page::on_scroll`]), clock ticks ([`Page::tick`]) and user
//! actions, and reads back [`Page::snapshot`] or [`Page::render_html`].
//!
//! Dropping the page tears everything down: observer registrations are
//! released, the scroll listener is detached and any scroll hold is returned.

use crate::content::SiteContent;
use crate::error::Result;
use crate::render;
use crate::section::SectionId;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, trace};
use vivant_core::config::EngineConfig;
use vivant_core::geometry::{Rect, Viewport};
use vivant_core::scroll::ScrollSource;
use vivant_core::scroll_lock::ScrollLock;
use vivant_core::signal::{SharedSignalGraph, SignalGraph};
use vivant_core::visibility::VisibilityObserver;
use vivant_motion::marquee::MarqueeTrack;
use vivant_motion::reveal::{RevealController, RevealPhase};
use vivant_motion::typewriter::Typewriter;
use vivant_widgets::contact::{ContactFields, ContactForm, SubmissionPhase};
use vivant_widgets::nav::{MenuState, NavEntry, NavStyle, Navigation, NavigationShell};
use vivant_widgets::submit::Submitter;

/// Viewport assumed until the host reports one
pub const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 800.0);

/// Height of the marquee strip between the hero and the about section
pub const MARQUEE_HEIGHT: f32 = 96.0;

/// Height of the footer below the contact section
pub const FOOTER_HEIGHT: f32 = 420.0;

struct SectionSlot {
    bounds: Rect,
    reveal: RevealController,
}

/// A composed single-page site
pub struct Page {
    config: EngineConfig,
    content: SiteContent,
    graph: SharedSignalGraph,
    observer: VisibilityObserver,
    scroll: ScrollSource,
    scroll_lock: ScrollLock,
    nav: NavigationShell,
    sections: IndexMap<SectionId, SectionSlot>,
    marquee: MarqueeTrack,
    typewriter: Typewriter,
    form: ContactForm,
    viewport: Viewport,
}

impl Page {
    /// Compose a page with its own scroll lock
    pub fn new(content: SiteContent, config: EngineConfig) -> Result<Self> {
        Self::with_scroll_lock(content, config, ScrollLock::new())
    }

    /// Compose a page that suspends scrolling through `scroll_lock`
    ///
    /// Use [`ScrollLock::with_hook`] to connect the lock to the host document.
    pub fn with_scroll_lock(
        content: SiteContent,
        config: EngineConfig,
        scroll_lock: ScrollLock,
    ) -> Result<Self> {
        config.validate()?;

        let graph = SignalGraph::shared();
        let observer = VisibilityObserver::new(Arc::clone(&graph));
        let scroll = ScrollSource::new();
        let nav = NavigationShell::new(
            content.nav.clone(),
            &scroll,
            &graph,
            scroll_lock.clone(),
            config.scroll_threshold,
        );

        let (width, height) = DEFAULT_VIEWPORT;
        let viewport = Viewport::new(0.0, width, height);
        let sections = stacked_layout(&viewport)
            .into_iter()
            .map(|(id, bounds)| {
                let reveal = RevealController::attach(&observer, bounds, id.reveal_config(&config));
                (id, SectionSlot { bounds, reveal })
            })
            .collect();

        let marquee = MarqueeTrack::new(content.marquee.iter().cloned(), config.marquee_duration_ms);
        let typewriter = Typewriter::new(content.brand.tagline.clone(), config.typewriter_interval_ms);

        let page = Self {
            config,
            content,
            graph,
            observer,
            scroll,
            scroll_lock,
            nav,
            sections,
            marquee,
            typewriter,
            form: ContactForm::new(),
            viewport,
        };

        let revealed = page.observer.process_viewport(&page.viewport);
        info!(
            sections = page.sections.len(),
            revealed, "page composed"
        );
        Ok(page)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Change the viewport size and restack sections at nominal heights
    ///
    /// Returns how many sections revealed as a result.
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        self.viewport = Viewport::new(self.viewport.scroll_y, width, height);
        let layout = stacked_layout(&self.viewport);
        self.layout(layout)
    }

    /// Apply measured section bounds reported by the host
    ///
    /// Sections not mentioned keep their bounds. Returns how many sections
    /// revealed as a result.
    pub fn layout<I>(&mut self, bounds: I) -> usize
    where
        I: IntoIterator<Item = (SectionId, Rect)>,
    {
        for (id, rect) in bounds {
            if let Some(slot) = self.sections.get_mut(&id) {
                slot.bounds = rect;
                slot.reveal.update_bounds(rect);
            }
        }
        self.observer.process_viewport(&self.viewport)
    }

    /// Bounds of a section
    pub fn section_bounds(&self, id: SectionId) -> Option<Rect> {
        self.sections.get(&id).map(|slot| slot.bounds)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Document height under the current layout
    pub fn document_height(&self) -> f32 {
        let sections = self
            .sections
            .values()
            .map(|slot| slot.bounds.bottom())
            .fold(0.0_f32, f32::max);
        sections + FOOTER_HEIGHT
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle a scroll notification
    ///
    /// Updates the navigation style and reveals sections that came into view.
    /// Returns how many sections revealed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> usize {
        self.viewport = self.viewport.scrolled_to(scroll_y);
        self.scroll.dispatch(scroll_y);
        let revealed = self.observer.process_viewport(&self.viewport);
        trace!(scroll_y, revealed, "scroll processed");
        revealed
    }

    /// Deliver a visibility ratio computed by the host for one section
    ///
    /// Notifications for sections that already revealed are ignored.
    pub fn notify_visibility(&self, id: SectionId, ratio: f32) -> bool {
        match self.sections.get(&id) {
            Some(slot) => self.observer.notify(slot.reveal.region(), ratio),
            None => false,
        }
    }

    /// Advance time-based animations to `elapsed_ms` since load
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.typewriter.advance(elapsed_ms);
    }

    /// Choose navigation entry `index`
    pub fn navigate(&mut self, index: usize) -> Option<Navigation> {
        let navigation = self.nav.select(index)?;
        debug!(?navigation, "navigation selected");
        Some(navigation)
    }

    /// Document offset a navigation instruction scrolls to
    ///
    /// `None` for anchors with no matching section; the browser leaves the
    /// page where it is in that case.
    pub fn scroll_target(&self, navigation: &Navigation) -> Option<f32> {
        let Navigation::ScrollTo(anchor) = navigation;
        let id = SectionId::from_anchor(anchor)?;
        self.section_bounds(id).map(|bounds| bounds.y)
    }

    /// Submit the contact form through `submitter`
    pub async fn submit_contact(&self, submitter: &dyn Submitter) -> Option<SubmissionPhase> {
        self.form.submit(submitter).await
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn nav(&self) -> &NavigationShell {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavigationShell {
        &mut self.nav
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn marquee(&self) -> &MarqueeTrack {
        &self.marquee
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn scroll_source(&self) -> &ScrollSource {
        &self.scroll
    }

    pub fn graph(&self) -> &SharedSignalGraph {
        &self.graph
    }

    /// Reveal controller of a section
    pub fn reveal(&self, id: SectionId) -> Option<&RevealController> {
        self.sections.get(&id).map(|slot| &slot.reveal)
    }

    pub fn phase(&self, id: SectionId) -> RevealPhase {
        self.reveal(id).map(RevealController::phase).unwrap_or_default()
    }

    /// Sections still waiting to reveal
    pub fn pending_sections(&self) -> usize {
        self.observer.active_count()
    }

    /// Section ids in document order
    pub fn anchors(&self) -> Vec<&'static str> {
        self.sections.keys().map(|id| id.anchor()).collect()
    }

    /// Navigation entries whose anchor matches no section
    pub fn check_anchors(&self) -> Vec<&NavEntry> {
        self.nav
            .entries()
            .iter()
            .filter(|entry| {
                SectionId::from_anchor(&entry.anchor)
                    .map_or(true, |id| !self.sections.contains_key(&id))
            })
            .collect()
    }

    /// Serializable view of the interactive state
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            scroll_y: self.viewport.scroll_y,
            nav_style: self.nav.style(),
            menu: self.nav.menu_state(),
            scroll_locked: self.scroll_lock.is_locked(),
            sections: self
                .sections
                .iter()
                .map(|(id, slot)| SectionSnapshot {
                    id: *id,
                    phase: slot.reveal.phase(),
                })
                .collect(),
            form: FormSnapshot {
                phase: self.form.phase(),
                fields: self.form.fields(),
                error: self.form.last_error().map(|err| err.to_string()),
            },
            tagline: self.typewriter.visible().to_string(),
        }
    }

    /// Full HTML document for the current state
    pub fn render_html(&self) -> String {
        render::render_document(self)
    }
}

/// Sections stacked top to bottom at nominal heights, full viewport width
fn stacked_layout(viewport: &Viewport) -> Vec<(SectionId, Rect)> {
    let mut y = 0.0;
    SectionId::ALL
        .into_iter()
        .map(|id| {
            let height = id.nominal_height(viewport.height);
            let rect = Rect::new(0.0, y, viewport.width, height);
            y += height;
            if id == SectionId::Home {
                y += MARQUEE_HEIGHT;
            }
            (id, rect)
        })
        .collect()
}

/// Interactive state at one instant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub scroll_y: f32,
    pub nav_style: NavStyle,
    pub menu: MenuState,
    pub scroll_locked: bool,
    pub sections: Vec<SectionSnapshot>,
    pub form: FormSnapshot,
    pub tagline: String,
}

impl PageSnapshot {
    pub fn phase(&self, id: SectionId) -> Option<RevealPhase> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.phase)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionSnapshot {
    pub id: SectionId,
    pub phase: RevealPhase,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub phase: SubmissionPhase,
    pub fields: ContactFields,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    fn page() -> Page {
        Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_only_hero_revealed_at_load() {
        let page = page();
        assert_eq!(page.phase(SectionId::Home), RevealPhase::Revealed);
        for id in &SectionId::ALL[1..] {
            assert_eq!(page.phase(*id), RevealPhase::Pending, "{id}");
        }
        assert_eq!(page.pending_sections(), 5);
    }

    #[test]
    fn test_stacked_layout() {
        let page = page();
        let about = page.section_bounds(SectionId::About).unwrap();
        assert_eq!(about.y, 800.0 + MARQUEE_HEIGHT);
        assert_eq!(about.width, 1280.0);
        let products = page.section_bounds(SectionId::Products).unwrap();
        assert_eq!(products.y, about.bottom());
    }

    #[test]
    fn test_scroll_reveals_and_stays_revealed() {
        let mut page = page();
        let products = page.section_bounds(SectionId::Products).unwrap();

        assert_eq!(page.on_scroll(products.y), 1);
        assert_eq!(page.phase(SectionId::Products), RevealPhase::Revealed);
        // Jumped past the about section without it entering the viewport
        assert_eq!(page.phase(SectionId::About), RevealPhase::Pending);

        page.on_scroll(0.0);
        assert_eq!(page.phase(SectionId::Products), RevealPhase::Revealed);
    }

    #[test]
    fn test_scroll_drives_nav_style() {
        let mut page = page();
        assert_eq!(page.nav().style(), NavStyle::Transparent);
        page.on_scroll(21.0);
        assert_eq!(page.nav().style(), NavStyle::Solid);
        page.on_scroll(0.0);
        assert_eq!(page.nav().style(), NavStyle::Transparent);
    }

    #[test]
    fn test_layout_moves_sections() {
        let mut page = page();
        // Pull the contact section up under the fold
        let revealed = page.layout([(SectionId::Contact, Rect::new(0.0, 500.0, 1280.0, 600.0))]);
        assert_eq!(revealed, 1);
        assert_eq!(page.phase(SectionId::Contact), RevealPhase::Revealed);
    }

    #[test]
    fn test_resize_restacks() {
        let mut page = page();
        page.resize(390.0, 844.0);
        let about = page.section_bounds(SectionId::About).unwrap();
        assert_eq!(about.y, 844.0 + MARQUEE_HEIGHT);
        assert_eq!(about.width, 390.0);
    }

    #[test]
    fn test_host_notification() {
        let page = page();
        assert!(!page.notify_visibility(SectionId::Features, 0.05));
        assert!(page.notify_visibility(SectionId::Features, 0.2));
        assert_eq!(page.phase(SectionId::Features), RevealPhase::Revealed);
        // Late notification after the reveal is a no-op
        assert!(!page.notify_visibility(SectionId::Features, 1.0));
    }

    #[test]
    fn test_navigate_resolves_scroll_target() {
        let mut page = page();
        page.nav_mut().toggle_menu();
        assert!(page.scroll_lock().is_locked());

        let navigation = page.navigate(2).unwrap();
        assert_eq!(navigation, Navigation::ScrollTo("products".into()));
        assert!(!page.scroll_lock().is_locked());
        assert_eq!(
            page.scroll_target(&navigation),
            page.section_bounds(SectionId::Products).map(|b| b.y)
        );
        assert_eq!(page.scroll_target(&Navigation::ScrollTo("gallery".into())), None);
    }

    #[test]
    fn test_check_anchors() {
        let mut content = SiteContent::lavie();
        assert!(Page::new(content.clone(), EngineConfig::default())
            .unwrap()
            .check_anchors()
            .is_empty());

        content.nav.push(NavEntry::new("Gallery", "gallery"));
        let page = Page::new(content, EngineConfig::default()).unwrap();
        let broken: Vec<&str> = page.check_anchors().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(broken, vec!["Gallery"]);
    }

    #[test]
    fn test_anchors_in_document_order() {
        assert_eq!(
            page().anchors(),
            vec!["home", "about", "products", "features", "testimonials", "contact"]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            reveal_threshold: 2.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Page::new(SiteContent::lavie(), config),
            Err(PageError::Config(_))
        ));
    }

    #[test]
    fn test_drop_releases_everything() {
        let lock = ScrollLock::new();
        let mut page =
            Page::with_scroll_lock(SiteContent::lavie(), EngineConfig::default(), lock.clone())
                .unwrap();
        let source = page.scroll_source().clone();
        page.nav_mut().toggle_menu();
        assert!(lock.is_locked());
        assert_eq!(source.listener_count(), 1);

        drop(page);
        assert!(!lock.is_locked());
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn test_tick_types_tagline() {
        let mut page = page();
        assert_eq!(page.snapshot().tagline, "");
        page.tick(80 * 4);
        assert_eq!(page.snapshot().tagline, "It's");
        page.tick(60_000);
        assert_eq!(page.snapshot().tagline, "It's All About The TASTE");
    }

    #[test]
    fn test_snapshot() {
        let mut page = page();
        page.on_scroll(100.0);
        let snapshot = page.snapshot();
        assert_eq!(snapshot.scroll_y, 100.0);
        assert_eq!(snapshot.nav_style, NavStyle::Solid);
        assert_eq!(snapshot.menu, MenuState::Closed);
        assert!(!snapshot.scroll_locked);
        assert_eq!(snapshot.phase(SectionId::Home), Some(RevealPhase::Revealed));
        assert_eq!(snapshot.form.phase, SubmissionPhase::Idle);
    }
}
