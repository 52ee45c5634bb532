//! Typewriter reveal for plain-text responses.
//!
//! Like every timing primitive here it is driven by `tick(dt_ms)`; the owner
//! keeps one per display slot and drops it when the slot goes away.

/// Reveals a string one character per `ms_per_char` milliseconds.
pub struct Typewriter {
    text: String,
    ms_per_char: u32,
    elapsed_ms: u64,
    /// Byte length of the revealed prefix.
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, ms_per_char: u32) -> Self {
        let mut tw = Self {
            text: text.into(),
            ms_per_char,
            elapsed_ms: 0,
            shown: 0,
        };
        // The first character appears immediately.
        tw.update();
        tw
    }

    fn update(&mut self) {
        if self.ms_per_char == 0 {
            self.shown = self.text.len();
            return;
        }
        let chars = (self.elapsed_ms / u64::from(self.ms_per_char) + 1) as usize;
        self.shown = self
            .text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
    }

    /// Advance by `dt_ms` and return the revealed prefix.
    pub fn tick(&mut self, dt_ms: u32) -> &str {
        if !self.is_finished() {
            self.elapsed_ms += u64::from(dt_ms);
            self.update();
        }
        self.visible()
    }

    /// Revealed prefix without advancing time.
    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.text.len()
    }
}
