//! Viewport-triggered reveal transitions
//!
//! A [`RevealController`] attaches to any region, owns the observer
//! registration for it, and maps the region's "has been visible" signal to one
//! of two styles:
//!
//! - [`RevealPhase::Pending`]: offset and/or scaled, fully transparent
//! - [`RevealPhase::Revealed`]: natural position, fully opaque
//!
//! The renderer emits both the phase class and the transition declarations;
//! the browser (or any host animator) interpolates between them. Groups of
//! children can cascade via a [`StaggerConfig`].
//!
//! # Example
//!
//! ```rust
//! use vivant_core::geometry::{Rect, Viewport};
//! use vivant_core::signal::SignalGraph;
//! use vivant_core::visibility::VisibilityObserver;
//! use vivant_motion::reveal::{RevealConfig, RevealController, RevealPhase};
//! use vivant_motion::stagger::StaggerConfig;
//!
//! let observer = VisibilityObserver::new(SignalGraph::shared());
//! let products = RevealController::attach(
//!     &observer,
//!     Rect::new(0.0, 1600.0, 1280.0, 900.0),
//!     RevealConfig::fade_up(0.1, 500, 40.0).with_stagger(StaggerConfig::new(150)),
//! );
//! assert_eq!(products.phase(), RevealPhase::Pending);
//!
//! observer.process_viewport(&Viewport::new(1000.0, 1280.0, 800.0));
//! assert_eq!(products.phase(), RevealPhase::Revealed);
//! assert_eq!(products.item_style(2, 6).delay_ms, 300);
//! ```

use crate::easing::Easing;
use crate::stagger::StaggerConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::trace;
use vivant_core::geometry::Rect;
use vivant_core::visibility::{ObserverHandle, RegionId, VisibilityObserver, VisibilitySignal};

/// Rendering state of a revealable region
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealPhase {
    /// Not yet seen: offset and transparent
    #[default]
    Pending,
    /// Seen at least once: natural position and opaque
    Revealed,
}

/// Shape of the pending state
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RevealPreset {
    /// No visual change; the region is tracked but always shown
    None,
    /// Slide up from `offset` px below while fading in
    FadeUp { offset: f32 },
    /// Grow from `from` scale while fading in
    ScaleIn { from: f32 },
}

impl RevealPreset {
    /// `(opacity, translate_y, scale)` while pending
    fn pending(self) -> (f32, f32, f32) {
        match self {
            RevealPreset::None => (1.0, 0.0, 1.0),
            RevealPreset::FadeUp { offset } => (0.0, offset, 1.0),
            RevealPreset::ScaleIn { from } => (0.0, 0.0, from),
        }
    }
}

/// Reveal behavior for one region
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct RevealConfig {
    /// Visible fraction that triggers the reveal
    pub threshold: f32,
    /// Transition length
    pub duration_ms: u32,
    /// Pending-state shape
    pub preset: RevealPreset,
    /// Timing curve
    #[serde(default)]
    pub easing: Easing,
    /// Cascade for child items
    #[serde(default)]
    pub stagger: Option<StaggerConfig>,
}

impl RevealConfig {
    /// Slide-up fade
    pub fn fade_up(threshold: f32, duration_ms: u32, offset: f32) -> Self {
        Self {
            threshold,
            duration_ms,
            preset: RevealPreset::FadeUp { offset },
            easing: Easing::EaseOut,
            stagger: None,
        }
    }

    /// Scale-in fade
    pub fn scale_in(threshold: f32, duration_ms: u32) -> Self {
        Self {
            threshold,
            duration_ms,
            preset: RevealPreset::ScaleIn { from: 0.9 },
            easing: Easing::EaseOut,
            stagger: None,
        }
    }

    /// Tracked but never hidden
    pub fn none(threshold: f32) -> Self {
        Self {
            threshold,
            duration_ms: 0,
            preset: RevealPreset::None,
            easing: Easing::Linear,
            stagger: None,
        }
    }

    /// Cascade child items
    pub fn with_stagger(mut self, stagger: StaggerConfig) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Change the timing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Resolved visual properties for one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl RevealStyle {
    /// Inline CSS declarations
    pub fn css(&self) -> String {
        let mut css = String::new();
        let _ = write!(css, "opacity:{};", fmt_number(self.opacity));
        let _ = write!(
            css,
            "transform:translateY({}px) scale({});",
            fmt_number(self.translate_y),
            fmt_number(self.scale)
        );
        if self.duration_ms > 0 {
            let _ = write!(
                css,
                "transition:opacity {d}ms {e},transform {d}ms {e};",
                d = self.duration_ms,
                e = self.easing.css()
            );
        }
        if self.delay_ms > 0 {
            let _ = write!(css, "transition-delay:{}ms;", self.delay_ms);
        }
        css
    }
}

fn fmt_number(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Self-contained reveal capability for one region
pub struct RevealController {
    signal: VisibilitySignal,
    handle: ObserverHandle,
    config: RevealConfig,
}

impl RevealController {
    /// Start observing `bounds` with `config`
    pub fn attach(observer: &VisibilityObserver, bounds: Rect, config: RevealConfig) -> Self {
        let observation = observer.observe(bounds, config.threshold);
        trace!(
            region = ?observation.handle.region(),
            preset = ?config.preset,
            "reveal attached"
        );
        Self {
            signal: observation.signal,
            handle: observation.handle,
            config,
        }
    }

    /// Current phase
    pub fn phase(&self) -> RevealPhase {
        if self.signal.get() {
            RevealPhase::Revealed
        } else {
            RevealPhase::Pending
        }
    }

    /// Whether the region has been revealed
    pub fn is_revealed(&self) -> bool {
        self.phase() == RevealPhase::Revealed
    }

    /// The observed region
    pub fn region(&self) -> RegionId {
        self.handle.region()
    }

    /// The underlying visibility signal
    pub fn signal(&self) -> &VisibilitySignal {
        &self.signal
    }

    /// Configuration this controller was attached with
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Move the observed region after layout
    pub fn update_bounds(&self, bounds: Rect) -> bool {
        self.handle.update_bounds(bounds)
    }

    /// Style of the region itself
    pub fn style(&self) -> RevealStyle {
        self.resolve(0, self.phase())
    }

    /// Style of child `index` out of `total`, including its stagger delay
    pub fn item_style(&self, index: usize, total: usize) -> RevealStyle {
        let delay = self.delay_for(index, total);
        self.resolve(delay, self.phase())
    }

    /// Interpolated style `elapsed_ms` after the reveal fired
    ///
    /// For hosts that animate frames themselves instead of relying on CSS
    /// transitions. Pending regions always sample the pending style.
    pub fn sample(&self, index: usize, total: usize, elapsed_ms: u32) -> RevealStyle {
        let delay = self.delay_for(index, total);
        let from = self.resolve(delay, RevealPhase::Pending);
        if !self.is_revealed() {
            return from;
        }
        let to = self.resolve(delay, RevealPhase::Revealed);

        let progress = if self.config.duration_ms == 0 {
            1.0
        } else {
            elapsed_ms.saturating_sub(delay) as f32 / self.config.duration_ms as f32
        };
        let t = self.config.easing.apply(progress);

        RevealStyle {
            opacity: lerp(from.opacity, to.opacity, t),
            translate_y: lerp(from.translate_y, to.translate_y, t),
            scale: lerp(from.scale, to.scale, t),
            ..to
        }
    }

    /// Class list for the current phase
    pub fn css_class(&self) -> &'static str {
        match self.phase() {
            RevealPhase::Pending => "reveal reveal--pending",
            RevealPhase::Revealed => "reveal reveal--revealed",
        }
    }

    /// Inline declarations for the region itself
    pub fn inline_style(&self) -> String {
        self.style().css()
    }

    fn delay_for(&self, index: usize, total: usize) -> u32 {
        self.config
            .stagger
            .map(|stagger| stagger.delay_for_index(index, total))
            .unwrap_or(0)
    }

    fn resolve(&self, delay_ms: u32, phase: RevealPhase) -> RevealStyle {
        let (opacity, translate_y, scale) = match phase {
            RevealPhase::Pending => self.config.preset.pending(),
            RevealPhase::Revealed => (1.0, 0.0, 1.0),
        };
        RevealStyle {
            opacity,
            translate_y,
            scale,
            duration_ms: self.config.duration_ms,
            delay_ms,
            easing: self.config.easing,
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivant_core::geometry::Viewport;
    use vivant_core::signal::SignalGraph;

    fn setup(config: RevealConfig) -> (VisibilityObserver, RevealController) {
        let observer = VisibilityObserver::new(SignalGraph::shared());
        let controller =
            RevealController::attach(&observer, Rect::new(0.0, 1000.0, 1280.0, 800.0), config);
        (observer, controller)
    }

    fn reveal(observer: &VisibilityObserver) {
        observer.process_viewport(&Viewport::new(800.0, 1280.0, 800.0));
    }

    #[test]
    fn test_pending_then_revealed() {
        let (observer, controller) = setup(RevealConfig::fade_up(0.1, 1000, 80.0));

        let pending = controller.style();
        assert_eq!(controller.phase(), RevealPhase::Pending);
        assert_eq!(pending.opacity, 0.0);
        assert_eq!(pending.translate_y, 80.0);

        reveal(&observer);
        let revealed = controller.style();
        assert_eq!(controller.phase(), RevealPhase::Revealed);
        assert_eq!(revealed.opacity, 1.0);
        assert_eq!(revealed.translate_y, 0.0);
        assert_eq!(revealed.duration_ms, 1000);
    }

    #[test]
    fn test_stays_revealed_after_scrolling_away() {
        let (observer, controller) = setup(RevealConfig::fade_up(0.1, 1000, 80.0));
        reveal(&observer);
        observer.process_viewport(&Viewport::new(0.0, 1280.0, 800.0));
        assert!(controller.is_revealed());
        assert_eq!(controller.css_class(), "reveal reveal--revealed");
    }

    #[test]
    fn test_stagger_delays() {
        let config = RevealConfig::fade_up(0.1, 500, 40.0).with_stagger(StaggerConfig::new(150));
        let (observer, controller) = setup(config);
        reveal(&observer);

        let delays: Vec<u32> = (0..3).map(|i| controller.item_style(i, 3).delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300]);
        assert_eq!(controller.style().delay_ms, 0);
    }

    #[test]
    fn test_scale_in_preset() {
        let (_observer, controller) = setup(RevealConfig::scale_in(0.1, 600));
        let pending = controller.style();
        assert_eq!(pending.scale, 0.9);
        assert_eq!(pending.translate_y, 0.0);
        assert_eq!(pending.opacity, 0.0);
    }

    #[test]
    fn test_none_preset_is_always_visible() {
        let (_observer, controller) = setup(RevealConfig::none(0.1));
        let style = controller.style();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(controller.phase(), RevealPhase::Pending);
    }

    #[test]
    fn test_sample_interpolates_after_delay() {
        let config = RevealConfig::fade_up(0.1, 1000, 100.0)
            .with_easing(Easing::Linear)
            .with_stagger(StaggerConfig::new(200));
        let (observer, controller) = setup(config);

        // Pending samples stay at the pending style
        assert_eq!(controller.sample(0, 2, 5000).opacity, 0.0);

        reveal(&observer);
        assert_eq!(controller.sample(1, 2, 100).opacity, 0.0);
        let mid = controller.sample(1, 2, 700);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.translate_y - 50.0).abs() < 1e-4);
        assert_eq!(controller.sample(1, 2, 5000).opacity, 1.0);
    }

    #[test]
    fn test_css() {
        let (observer, controller) = setup(
            RevealConfig::fade_up(0.1, 500, 40.0).with_stagger(StaggerConfig::new(150)),
        );
        assert_eq!(
            controller.item_style(1, 3).css(),
            "opacity:0;transform:translateY(40px) scale(1);\
             transition:opacity 500ms ease-out,transform 500ms ease-out;\
             transition-delay:150ms;"
        );

        reveal(&observer);
        assert_eq!(
            controller.style().css(),
            "opacity:1;transform:translateY(0px) scale(1);\
             transition:opacity 500ms ease-out,transform 500ms ease-out;"
        );
    }

    #[test]
    fn test_drop_releases_registration() {
        let (observer, controller) = setup(RevealConfig::fade_up(0.1, 500, 40.0));
        assert_eq!(observer.active_count(), 1);
        drop(controller);
        assert_eq!(observer.active_count(), 0);
    }
}
