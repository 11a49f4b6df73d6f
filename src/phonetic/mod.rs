//! Phonemes, pronunciations and phoneme substitution rules.
//!
//! A [`Pronunciation`] is the unit the pipeline reasons about: its vowel
//! stress digits give a word's stress pattern, and its trailing phonemes
//! decide whether two words rhyme.
//!
//! # Rule Sets
//!
//! - [`ENGLISH_SUBSTITUTIONS`] - folds CMU's unstressed `ER0` into `R`

pub mod rules;
pub mod types;

pub use rules::{apply_substitutions, PhonemeSubstitution, ENGLISH_SUBSTITUTIONS};
pub use types::{Phoneme, Pronunciation, Stress};
