//! Engine tuning constants
//!
//! Every field has a serde default, so a config file only needs to mention
//! the values it changes:
//!
//! ```toml
//! scroll_threshold = 50.0
//! stagger_step_ms = 100
//! ```

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Timing and threshold settings for the disclosure engine
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Fraction of a section that must be visible before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f32,
    /// Scroll offset (px) past which the navigation bar turns solid
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f32,
    /// Section reveal transition length
    #[serde(default = "default_reveal_duration_ms")]
    pub reveal_duration_ms: u32,
    /// Card reveal transition length
    #[serde(default = "default_card_duration_ms")]
    pub card_duration_ms: u32,
    /// Delay between consecutive product cards
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u32,
    /// Delay between consecutive testimonials
    #[serde(default = "default_testimonial_stagger_ms")]
    pub testimonial_stagger_ms: u32,
    /// One full marquee loop
    #[serde(default = "default_marquee_duration_ms")]
    pub marquee_duration_ms: u32,
    /// Simulated contact submission latency
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Delay between typewriter characters
    #[serde(default = "default_typewriter_interval_ms")]
    pub typewriter_interval_ms: u32,
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_scroll_threshold() -> f32 {
    20.0
}

fn default_reveal_duration_ms() -> u32 {
    1000
}

fn default_card_duration_ms() -> u32 {
    500
}

fn default_stagger_step_ms() -> u32 {
    150
}

fn default_testimonial_stagger_ms() -> u32 {
    200
}

fn default_marquee_duration_ms() -> u32 {
    20_000
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_typewriter_interval_ms() -> u32 {
    80
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
            scroll_threshold: default_scroll_threshold(),
            reveal_duration_ms: default_reveal_duration_ms(),
            card_duration_ms: default_card_duration_ms(),
            stagger_step_ms: default_stagger_step_ms(),
            testimonial_stagger_ms: default_testimonial_stagger_ms(),
            marquee_duration_ms: default_marquee_duration_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            typewriter_interval_ms: default_typewriter_interval_ms(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(CoreError::InvalidConfig(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        for (name, value) in [
            ("reveal_duration_ms", self.reveal_duration_ms),
            ("card_duration_ms", self.card_duration_ms),
        ] {
            if value == 0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        if self.marquee_duration_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "marquee_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.typewriter_interval_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "typewriter_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.scroll_threshold, 20.0);
        assert_eq!(config.submit_delay_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("scroll_threshold = 50.0\nstagger_step_ms = 100\n")
            .unwrap();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.stagger_step_ms, 100);
        assert_eq!(config.marquee_duration_ms, 20_000);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_out_of_range_threshold() {
        let err = EngineConfig::from_toml_str("reveal_threshold = 1.5").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_transition_durations() {
        for text in ["reveal_duration_ms = 0", "card_duration_ms = 0"] {
            let err = EngineConfig::from_toml_str(text).unwrap_err();
            assert!(
                matches!(&err, CoreError::InvalidConfig(msg) if msg.contains("must be greater than zero")),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("scroll_threshold = \"far\"").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }
}
