//! Per-analysis diagnostics.

use rustc_hash::FxHashSet;

/// Collects facts about one analysis run that do not change its result.
///
/// Create one per analysis and pass it down; nothing here is shared between
/// runs.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    unknown_words: Vec<String>,
    seen: FxHashSet<String>,
}

impl Diagnostics {
    /// Empty diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word that the dictionary did not know. Duplicates are
    /// ignored; first-seen order is kept.
    pub fn record_unknown(&mut self, word: &str) {
        if self.seen.insert(word.to_string()) {
            self.unknown_words.push(word.to_string());
        }
    }

    /// Words that fell back to estimated stress, in first-seen order.
    pub fn unknown_words(&self) -> &[String] {
        &self.unknown_words
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.unknown_words.is_empty()
    }

    /// Consume and return the unknown words.
    pub fn into_unknown_words(self) -> Vec<String> {
        self.unknown_words
    }
}
