//! Vivant Page
//!
//! Composes the Lavie du Vivants single-page site out of the engine
//! primitives:
//!
//! - [`content`]: read-only records (brand, products, features, testimonials)
//! - [`theme`] and [`icons`]: design tokens and the closed icon set
//! - [`section`]: section ids, anchors and per-section reveal behavior
//! - [`page::Page`]: the live page, driven by geometry, scroll and user input
//! - [`render`]: HTML output for the page's current state
//!
//! # Example
//!
//! ```rust
//! use vivant_core::config::EngineConfig;
//! use vivant_page::content::SiteContent;
//! use vivant_page::page::Page;
//! use vivant_page::section::SectionId;
//! use vivant_motion::reveal::RevealPhase;
//!
//! let mut page = Page::new(SiteContent::lavie(), EngineConfig::default()).unwrap();
//! assert_eq!(page.phase(SectionId::Products), RevealPhase::Pending);
//!
//! let products = page.section_bounds(SectionId::Products).unwrap();
//! page.on_scroll(products.y);
//! assert_eq!(page.phase(SectionId::Products), RevealPhase::Revealed);
//! assert!(page.render_html().contains("id=\"products\""));
//! ```

pub mod content;
pub mod error;
pub mod icons;
pub mod page;
pub mod render;
pub mod section;
pub mod theme;

pub use content::{Brand, ContactChannel, Feature, Product, SiteContent, Stat, Testimonial};
pub use error::{PageError, Result};
pub use icons::Icon;
pub use page::{Page, PageSnapshot};
pub use section::SectionId;
pub use theme::{Color, ThemeTokens};
pub use vivant_motion::reveal::RevealPhase;
