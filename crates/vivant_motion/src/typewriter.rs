//! Character-by-character text disclosure

/// Reveals a string one character per interval
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    interval_ms: u32,
    shown: usize,
    total: usize,
}

impl Typewriter {
    /// Start with nothing shown
    pub fn new(text: impl Into<String>, interval_ms: u32) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            interval_ms: interval_ms.max(1),
            shown: 0,
            total,
        }
    }

    /// Set the clock to `elapsed_ms` since start
    ///
    /// The display never goes backwards and stops at the full text.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let due = elapsed_ms / u64::from(self.interval_ms);
        let due = usize::try_from(due).unwrap_or(usize::MAX).min(self.total);
        self.shown = self.shown.max(due);
    }

    /// Show the full text immediately
    pub fn finish(&mut self) {
        self.shown = self.total;
    }

    /// Currently displayed prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Whether the full text is displayed
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Full text
    pub fn text(&self) -> &str {
        &self.text
    }
}
