//! Vivant Motion
//!
//! Time-based presentation built on the core visibility signals.
//!
//! # Features
//!
//! - **Reveal**: one-shot pending/revealed transitions driven by viewport entry
//! - **Stagger**: per-item delays so groups cascade instead of popping together
//! - **Marquee**: seamless infinite strips built by doubling their content
//! - **Typewriter**: character-by-character text disclosure
//! - **Easing**: the timing curves the transitions use

pub mod easing;
pub mod marquee;
pub mod reveal;
pub mod stagger;
pub mod typewriter;

pub use easing::Easing;
pub use marquee::{build_marquee, MarqueeTrack};
pub use reveal::{RevealConfig, RevealController, RevealPhase, RevealPreset, RevealStyle};
pub use stagger::{StaggerConfig, StaggerDirection};
pub use typewriter::Typewriter;
