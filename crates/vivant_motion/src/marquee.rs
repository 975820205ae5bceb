//! Infinite horizontal marquee
//!
//! The strip renders its items twice in a row and translates from `0` to
//! `-50%` of its own width, then restarts. Because the second half is an exact
//! copy of the first, the restart lands on identical content and the loop has
//! no visible seam.

use std::fmt::Write;

/// Double a sequence so it can loop seamlessly
///
/// Order is preserved and nothing is deduplicated. An empty input yields an
/// empty output.
pub fn build_marquee<T: Clone>(items: &[T]) -> Vec<T> {
    let mut sequence = Vec::with_capacity(items.len() * 2);
    sequence.extend_from_slice(items);
    sequence.extend_from_slice(items);
    sequence
}

/// A configured marquee strip
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeTrack {
    items: Vec<String>,
    duration_ms: u32,
    separator: Option<String>,
}

impl MarqueeTrack {
    /// Create a strip cycling through `items` once every `duration_ms`
    pub fn new<I, S>(items: I, duration_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            duration_ms: duration_ms.max(1),
            separator: None,
        }
    }

    /// Decoration rendered between consecutive items
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Decoration between items, if any
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Source items, not doubled
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Rendered sequence, doubled for looping
    pub fn sequence(&self) -> Vec<String> {
        build_marquee(&self.items)
    }

    /// Duration of one loop
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Horizontal offset in px, `elapsed_ms` into the animation
    ///
    /// `rendered_width` is the width of the full doubled strip. The offset
    /// moves linearly from `0` to `-rendered_width / 2` and wraps.
    pub fn offset_at(&self, elapsed_ms: u64, rendered_width: f32) -> f32 {
        let duration = u64::from(self.duration_ms);
        let progress = (elapsed_ms % duration) as f32 / duration as f32;
        let offset = -(rendered_width / 2.0) * progress;
        if offset == 0.0 {
            0.0
        } else {
            offset
        }
    }

    /// CSS keyframes and animation rule for the strip
    pub fn keyframes_css(&self, name: &str) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "@keyframes {name}{{from{{transform:translateX(0)}}to{{transform:translateX(-50%)}}}}"
        );
        let _ = write!(
            css,
            ".{name}{{animation:{name} {}ms linear infinite;}}",
            self.duration_ms
        );
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_in_order() {
        assert_eq!(
            build_marquee(&["A", "B", "C"]),
            vec!["A", "B", "C", "A", "B", "C"]
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(build_marquee(&empty).is_empty());
    }

    #[test]
    fn test_halves_mirror_input() {
        let items = ["Artisanal Spices", "Gourmet Granola", "Event Styling", "Kaduna Finest"];
        let out = build_marquee(&items);
        let n = items.len();
        assert_eq!(out.len(), 2 * n);
        for i in 0..n {
            assert_eq!(out[i], items[i]);
            assert_eq!(out[i + n], items[i]);
        }
    }

    #[test]
    fn test_keeps_duplicates() {
        assert_eq!(build_marquee(&[1, 1]), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_offset_wraps_at_half_width() {
        let track = MarqueeTrack::new(["A", "B"], 20_000);
        assert_eq!(track.offset_at(0, 1000.0), 0.0);
        assert_eq!(track.offset_at(10_000, 1000.0), -250.0);
        assert_eq!(track.offset_at(19_999, 1000.0).round(), -500.0);
        assert_eq!(track.offset_at(20_000, 1000.0), 0.0);
        assert_eq!(track.offset_at(30_000, 1000.0), -250.0);
    }

    #[test]
    fn test_sequence_and_keyframes() {
        let track = MarqueeTrack::new(vec!["A".to_string()], 25_000);
        assert_eq!(track.sequence(), vec!["A", "A"]);
        assert_eq!(
            track.keyframes_css("marquee"),
            "@keyframes marquee{from{transform:translateX(0)}to{transform:translateX(-50%)}}\
             .marquee{animation:marquee 25000ms linear infinite;}"
        );
    }

    #[test]
    fn test_zero_duration_is_clamped() {
        let track = MarqueeTrack::new(["A"], 0);
        assert_eq!(track.duration_ms(), 1);
        assert_eq!(track.offset_at(5, 100.0), 0.0);
    }

    #[test]
    fn test_separator() {
        let track = MarqueeTrack::new(["A"], 20_000);
        assert_eq!(track.separator(), None);
        let track = track.with_separator("✦");
        assert_eq!(track.separator(), Some("✦"));
    }
}
