//! Phoneme substitution rules.
//!
//! Some dictionary transcriptions get in the way of rhyme comparison. CMU
//! writes the unstressed r-coloured vowel of "water" and "daughter" as `ER0`,
//! which otherwise never matches the `R` of "door" or "more". A language
//! profile supplies a table of substitutions that are applied to every
//! pronunciation before tails are compared.

use std::borrow::Cow;

use super::types::{Phoneme, Pronunciation};

/// Replace one phoneme symbol with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeSubstitution {
    /// Symbol to replace, compared exactly (stress digit included)
    pub from: &'static str,
    /// Replacement symbol
    pub to: &'static str,
}

impl PhonemeSubstitution {
    /// Construct a substitution rule.
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Substitutions for American English CMU transcriptions.
pub const ENGLISH_SUBSTITUTIONS: &[PhonemeSubstitution] = &[PhonemeSubstitution::new("ER0", "R")];

/// Apply a substitution table to a pronunciation.
///
/// The first rule whose `from` matches a phoneme wins. Borrows the input
/// unchanged when no rule fires.
///
/// ```rust
/// use poetics::phonetic::{apply_substitutions, Pronunciation, ENGLISH_SUBSTITUTIONS};
///
/// let water = Pronunciation::parse("W AO1 T ER0");
/// let replaced = apply_substitutions(ENGLISH_SUBSTITUTIONS, &water);
/// assert_eq!(replaced.to_string(), "W AO1 T R");
/// ```
pub fn apply_substitutions<'a>(
    rules: &[PhonemeSubstitution],
    pronunciation: &'a Pronunciation,
) -> Cow<'a, Pronunciation> {
    let substitute = |phoneme: &Phoneme| {
        rules
            .iter()
            .find(|rule| rule.from == phoneme.as_str())
            .map(|rule| rule.to)
    };

    if !pronunciation.phonemes().iter().any(|p| substitute(p).is_some()) {
        return Cow::Borrowed(pronunciation);
    }

    Cow::Owned(
        pronunciation
            .phonemes()
            .iter()
            .map(|p| match substitute(p) {
                Some(to) => Phoneme::new(to),
                None => p.clone(),
            })
            .collect(),
    )
}
