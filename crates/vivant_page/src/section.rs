//! Page sections
//!
//! Each section is one observed region. Some reveal as a whole block; the
//! product grid and the testimonials keep the section itself in place and
//! cascade their cards instead.

use serde::Serialize;
use std::fmt;
use vivant_core::config::EngineConfig;
use vivant_motion::reveal::RevealConfig;
use vivant_motion::stagger::StaggerConfig;

/// Sections in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    About,
    Products,
    Features,
    Testimonials,
    Contact,
}

/// Which elements carry the reveal styles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    /// The section element itself
    Section,
    /// Each card inside the section, staggered by index
    Items,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Element id used as the navigation fragment
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }

    pub fn reveal_target(self) -> RevealTarget {
        match self {
            SectionId::Products | SectionId::Testimonials => RevealTarget::Items,
            _ => RevealTarget::Section,
        }
    }

    /// Reveal behavior derived from the engine settings
    pub fn reveal_config(self, config: &EngineConfig) -> RevealConfig {
        let threshold = config.reveal_threshold;
        match self {
            // The hero is on screen at load; it is tracked but never hidden
            SectionId::Home => RevealConfig::none(threshold),
            SectionId::About => RevealConfig::fade_up(threshold, config.reveal_duration_ms, 80.0),
            SectionId::Products => RevealConfig::fade_up(threshold, config.card_duration_ms, 40.0)
                .with_stagger(StaggerConfig::new(config.stagger_step_ms)),
            SectionId::Features | SectionId::Contact => {
                RevealConfig::fade_up(threshold, config.reveal_duration_ms, 40.0)
            }
            SectionId::Testimonials => RevealConfig::scale_in(threshold, config.card_duration_ms)
                .with_stagger(StaggerConfig::new(config.testimonial_stagger_ms)),
        }
    }

    /// Nominal height (px) used before the host reports real layout
    pub fn nominal_height(self, viewport_height: f32) -> f32 {
        match self {
            SectionId::Home => viewport_height.max(640.0),
            SectionId::About => 960.0,
            SectionId::Products => 1600.0,
            SectionId::Features => 820.0,
            SectionId::Testimonials => 760.0,
            SectionId::Contact => 1040.0,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivant_motion::reveal::RevealPreset;

    #[test]
    fn test_anchor_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("#contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_anchor("gallery"), None);
    }

    #[test]
    fn test_reveal_configs_follow_engine_settings() {
        let config = EngineConfig::default();

        let products = SectionId::Products.reveal_config(&config);
        assert_eq!(products.duration_ms, 500);
        assert_eq!(products.stagger.map(|s| s.step_ms), Some(150));

        let testimonials = SectionId::Testimonials.reveal_config(&config);
        assert!(matches!(testimonials.preset, RevealPreset::ScaleIn { .. }));
        assert_eq!(testimonials.stagger.map(|s| s.step_ms), Some(200));

        let about = SectionId::About.reveal_config(&config);
        assert_eq!(about.duration_ms, 1000);
        assert_eq!(about.threshold, 0.1);

        assert_eq!(SectionId::Home.reveal_config(&config).preset, RevealPreset::None);
    }

    #[test]
    fn test_item_targets() {
        assert_eq!(SectionId::Products.reveal_target(), RevealTarget::Items);
        assert_eq!(SectionId::About.reveal_target(), RevealTarget::Section);
    }
}
