//! Per-line stress patterns.
//!
//! Each word contributes the stress digits of one dictionary pronunciation,
//! or an estimated `1 0 0 ...` when the word is unknown. A line's
//! [`StressPattern`] is the concatenation of its words' digits.

use std::fmt;

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::dictionary::PronouncingDictionary;
use crate::phonetic::Pronunciation;
use crate::poem::{Line, Poem};
use crate::profile::LanguageProfile;

/// Binary stress digits for one line, e.g. `"0101010101"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StressPattern(String);

impl StressPattern {
    /// The digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for stanza breaks and lines without words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for StressPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Choose the pronunciation used for stress: the lexicographically smallest.
///
/// Dictionaries list homographs in no meaningful order, so taking the
/// minimum keeps results reproducible across dictionary builds.
pub fn select_pronunciation(pronunciations: &[Pronunciation]) -> Option<&Pronunciation> {
    pronunciations.iter().min()
}

/// Derives stress patterns from a pronouncing dictionary.
pub struct StressAnalyzer<'a, D: ?Sized, P: ?Sized> {
    dictionary: &'a D,
    profile: &'a P,
}

impl<'a, D, P> StressAnalyzer<'a, D, P>
where
    D: PronouncingDictionary + ?Sized,
    P: LanguageProfile + ?Sized,
{
    /// Create an analyzer over a dictionary and language profile.
    pub fn new(dictionary: &'a D, profile: &'a P) -> Self {
        Self {
            dictionary,
            profile,
        }
    }

    /// Stress digits of a single word. Empty words yield an empty string.
    ///
    /// Unknown words get stress on the first estimated syllable only and are
    /// recorded in `diagnostics`.
    pub fn word_stress(&self, word: &str, diagnostics: &mut Diagnostics) -> String {
        if word.is_empty() {
            return String::new();
        }

        let key = word.to_lowercase();
        let known = self
            .dictionary
            .pronunciations(&key)
            .and_then(select_pronunciation);

        match known {
            Some(pronunciation) => pronunciation.stress_pattern(),
            None => {
                let syllables = self.profile.estimate_syllables(word).max(1);
                tracing::trace!(word = %key, syllables, "estimated stress for unknown word");
                diagnostics.record_unknown(&key);
                let mut digits = String::with_capacity(syllables);
                digits.push('1');
                digits.extend(std::iter::repeat('0').take(syllables - 1));
                digits
            }
        }
    }

    /// Stress pattern of one line.
    pub fn scan_line(&self, line: &Line, diagnostics: &mut Diagnostics) -> StressPattern {
        StressPattern(
            line.words()
                .iter()
                .map(|word| self.word_stress(word, diagnostics))
                .collect(),
        )
    }

    /// Stress patterns for every line, stanza breaks included (as empty
    /// patterns), so the result lines up with `poem.lines()`.
    pub fn scan(&self, poem: &Poem, diagnostics: &mut Diagnostics) -> Vec<StressPattern> {
        poem.lines()
            .iter()
            .map(|line| self.scan_line(line, diagnostics))
            .collect()
    }
}
