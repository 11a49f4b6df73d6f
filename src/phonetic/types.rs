//! Type definitions for phonemes and pronunciations.
//!
//! Phonemes follow the ARPABET conventions of the CMU Pronouncing Dictionary:
//! consonants are bare symbols (`"K"`, `"SH"`) and vowels carry a trailing
//! stress digit (`"AH0"`, `"IY1"`, `"EH2"`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lexical stress carried by a vowel phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stress {
    /// Digit `0`
    Unstressed,
    /// Digit `1`
    Primary,
    /// Digit `2`
    Secondary,
}

impl Stress {
    /// Parse an ARPABET stress digit.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// The ARPABET digit for this stress level.
    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// The binary stress digit: secondary stress counts as stressed.
    #[inline]
    pub fn binary_digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary | Stress::Secondary => '1',
        }
    }
}

/// A single ARPABET phoneme token.
///
/// Ordering is plain string ordering of the symbol, which makes the derived
/// ordering of [`Pronunciation`] lexicographic over its tokens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(String);

impl Phoneme {
    /// Create a phoneme from its symbol, e.g. `"AH0"` or `"T"`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Phoneme(symbol.into())
    }

    /// The raw symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stress of a vowel phoneme, `None` for consonants.
    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_digit)
    }

    /// True for stress-bearing (vowel) phonemes.
    pub fn is_vowel(&self) -> bool {
        self.stress().is_some()
    }

    /// Equality with secondary stress folded into primary stress.
    ///
    /// `EH2` equals `EH1`, but neither equals `EH0`.
    pub fn eq_collapsed(&self, other: &Phoneme) -> bool {
        match (self.split_stress(), other.split_stress()) {
            ((a, Some(sa)), (b, Some(sb))) => a == b && sa.binary_digit() == sb.binary_digit(),
            ((a, None), (b, None)) => a == b,
            _ => false,
        }
    }

    fn split_stress(&self) -> (&str, Option<Stress>) {
        match self.stress() {
            Some(stress) => (&self.0[..self.0.len() - 1], Some(stress)),
            None => (self.0.as_str(), None),
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phoneme {
    fn from(symbol: &str) -> Self {
        Phoneme::new(symbol)
    }
}

/// One way of pronouncing a word: an ordered sequence of phonemes.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pronunciation(Vec<Phoneme>);

impl Pronunciation {
    /// Wrap a phoneme sequence.
    pub fn new(phonemes: Vec<Phoneme>) -> Self {
        Pronunciation(phonemes)
    }

    /// Parse a whitespace-separated phoneme string, e.g. `"K AE1 T"`.
    pub fn parse(phonemes: &str) -> Self {
        phonemes.split_whitespace().map(Phoneme::from).collect()
    }

    /// The phonemes in order.
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.0
    }

    /// Number of phonemes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no phonemes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stress-bearing vowels, i.e. the syllable count.
    pub fn vowel_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_vowel()).count()
    }

    /// Binary stress digits of the vowels in order (`2` collapsed into `1`).
    ///
    /// ```rust
    /// use poetics::phonetic::Pronunciation;
    ///
    /// let p = Pronunciation::parse("AE2 L Y UW1 M IH0 N IY0 AH0 M");
    /// assert_eq!(p.stress_pattern(), "11000");
    /// ```
    pub fn stress_pattern(&self) -> String {
        self.0
            .iter()
            .filter_map(Phoneme::stress)
            .map(Stress::binary_digit)
            .collect()
    }

    /// The trailing `n` phonemes (all of them when shorter).
    pub fn tail(&self, n: usize) -> &[Phoneme] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    /// Compare the trailing `n` phonemes of two pronunciations, folding
    /// secondary stress into primary stress.
    pub fn tail_matches(&self, other: &Pronunciation, n: usize) -> bool {
        let a = self.tail(n);
        let b = other.tail(n);
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_collapsed(y))
    }
}

impl FromIterator<Phoneme> for Pronunciation {
    fn from_iter<I: IntoIterator<Item = Phoneme>>(iter: I) -> Self {
        Pronunciation(iter.into_iter().collect())
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phoneme) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", phoneme)?;
        }
        Ok(())
    }
}
