//! Theme tokens
//!
//! Colors and font stacks shared by every section. The renderer exposes them
//! as CSS custom properties on `:root`.

use crate::error::{PageError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Write;

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// sRGB color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb`
    pub fn parse(text: &str) -> Result<Self> {
        let digits = text
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| PageError::InvalidColor(text.to_string()))?;
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|_| PageError::InvalidColor(text.to_string()))?;
        Ok(Self::from_hex(hex))
    }

    /// `rgba(...)` with the given alpha, for translucent overlays
    pub fn with_alpha(self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Brand palette and typography
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeTokens {
    /// Page background, deep blue-black
    pub primary: Color,
    /// Headings and highlights, cream-gold
    pub secondary: Color,
    /// Calls to action, magenta
    pub accent: Color,
    pub heading_font: String,
    pub body_font: String,
}

impl ThemeTokens {
    /// The Lavie du Vivants palette
    pub fn lavie() -> Self {
        Self {
            primary: Color::from_hex(0x1a1a2e),
            secondary: Color::from_hex(0xf5e6ca),
            accent: Color::from_hex(0xe84393),
            heading_font: "Cormorant Garamond".to_string(),
            body_font: "Inter".to_string(),
        }
    }

    /// `:root` block declaring every token as a custom property
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root{");
        let _ = write!(css, "--color-primary:{};", self.primary);
        let _ = write!(css, "--color-secondary:{};", self.secondary);
        let _ = write!(css, "--color-accent:{};", self.accent);
        let _ = write!(css, "--color-text:{};", Color::WHITE);
        let _ = write!(css, "--color-overlay:{};", self.primary.with_alpha(0.95));
        let _ = write!(css, "--color-shadow:{};", Color::BLACK.with_alpha(0.4));
        let _ = write!(css, "--font-heading:'{}',serif;", self.heading_font);
        let _ = write!(css, "--font-body:'{}',sans-serif;", self.body_font);
        css.push('}');
        css
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::lavie()
    }
}
