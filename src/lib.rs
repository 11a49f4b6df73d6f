//! # poetics
//!
//! Guess the metre, rhyme scheme and named form of a poem.
//!
//! The pipeline is a chain of small analyzers over a pronouncing
//! dictionary:
//!
//! 1. [`tokenizer`] splits text into a [`Poem`](poem::Poem) of word lines.
//! 2. [`stress::StressAnalyzer`] turns each line into a `0`/`1` stress
//!    pattern.
//! 3. [`rhyme::RhymeDetector`] labels line endings with a rhyme scheme.
//! 4. [`template`] finds the nearest metre, rhyme type and stanza shape by
//!    edit distance.
//! 5. [`form::FormClassifier`] walks an ordered rule table to name the form.
//!
//! Language-specific behaviour (tokenization, phoneme substitution,
//! syllable estimation for unknown words) comes from a
//! [`LanguageProfile`](profile::LanguageProfile).
//!
//! ## Example
//!
//! ```rust
//! use poetics::prelude::*;
//!
//! let dict = CmuDictionary::from_text(
//!     "the DH AH0\ncat K AE1 T\nsat S AE1 T\non AA1 N\nmat M AE1 T\n",
//! )
//! .unwrap();
//! let profile = English::new();
//! let classifier = FormClassifier::new(&dict, &profile);
//!
//! let analysis = classifier.analyze_text("the cat sat\non the mat");
//! assert_eq!(analysis.rhyme_scheme.to_string(), "aa");
//! println!("{}", analysis.form);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod form;
pub mod phonetic;
pub mod poem;
pub mod profile;
pub mod rhyme;
pub mod stress;
pub mod syllable;
pub mod template;
pub mod tokenizer;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::diagnostics::Diagnostics;
    pub use crate::dictionary::{CmuDictionary, DictionaryFormat, PronouncingDictionary};
    pub use crate::error::{DictionaryError, Result};
    pub use crate::form::{Analysis, Form, FormClassifier};
    pub use crate::phonetic::{Phoneme, Pronunciation, Stress};
    pub use crate::poem::{Line, Poem};
    pub use crate::profile::{English, LanguageProfile, Neutral, ProfileKind};
    pub use crate::rhyme::{RhymeDetector, RhymeLabel, RhymeScheme};
    pub use crate::stress::{StressAnalyzer, StressPattern};
    pub use crate::syllable::{SyllableEstimator, VowelGroupEstimator};
    pub use crate::template::{best_match, Match, Template};
    pub use crate::tokenizer::tokenize;
}
