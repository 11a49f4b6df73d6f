//! Language profiles.
//!
//! A profile bundles the language-specific pieces of the pipeline:
//! tokenization, phoneme substitution before rhyme comparison, and the
//! syllable estimate for unknown words. Profiles are injected into the
//! analyzers, so a new language is a new implementation of
//! [`LanguageProfile`] rather than a change to the pipeline.

use std::borrow::Cow;
use std::fmt;

use crate::phonetic::{apply_substitutions, Pronunciation, ENGLISH_SUBSTITUTIONS};
use crate::poem::Poem;
use crate::syllable::{SyllableEstimator, VowelGroupEstimator};
use crate::tokenizer;

/// Language-specific behaviour of the analysis pipeline.
pub trait LanguageProfile {
    /// Short name, used in logs and settings.
    fn name(&self) -> &'static str;

    /// Split raw text into a poem.
    fn tokenize(&self, text: &str) -> Poem {
        tokenizer::tokenize(text)
    }

    /// Rewrite a pronunciation before its tail is compared for rhyme.
    fn substitute_phonemes<'a>(&self, pronunciation: &'a Pronunciation) -> Cow<'a, Pronunciation> {
        Cow::Borrowed(pronunciation)
    }

    /// Syllable count for a word the dictionary does not know (at least 1).
    fn estimate_syllables(&self, word: &str) -> usize;
}

/// English with CMU transcriptions.
#[derive(Debug, Clone, Default)]
pub struct English<E = VowelGroupEstimator> {
    estimator: E,
}

impl English {
    /// English with the default vowel-group estimator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SyllableEstimator> English<E> {
    /// English with a custom syllable estimator.
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }
}

impl<E: SyllableEstimator> LanguageProfile for English<E> {
    fn name(&self) -> &'static str {
        "english"
    }

    fn substitute_phonemes<'a>(&self, pronunciation: &'a Pronunciation) -> Cow<'a, Pronunciation> {
        apply_substitutions(ENGLISH_SUBSTITUTIONS, pronunciation)
    }

    fn estimate_syllables(&self, word: &str) -> usize {
        self.estimator.estimate(word).max(1)
    }
}

/// Profile with no phoneme substitutions.
#[derive(Debug, Clone, Default)]
pub struct Neutral<E = VowelGroupEstimator> {
    estimator: E,
}

impl Neutral {
    /// Neutral profile with the default vowel-group estimator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SyllableEstimator> Neutral<E> {
    /// Neutral profile with a custom syllable estimator.
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }
}

impl<E: SyllableEstimator> LanguageProfile for Neutral<E> {
    fn name(&self) -> &'static str {
        "neutral"
    }

    fn estimate_syllables(&self, word: &str) -> usize {
        self.estimator.estimate(word).max(1)
    }
}

/// Built-in profiles, selectable from settings and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// [`English`]
    #[default]
    English,
    /// [`Neutral`]
    Neutral,
}

impl ProfileKind {
    /// Instantiate the profile with its default estimator.
    pub fn build(self) -> Box<dyn LanguageProfile + Send + Sync> {
        match self {
            ProfileKind::English => Box::new(English::new()),
            ProfileKind::Neutral => Box::new(Neutral::new()),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}
