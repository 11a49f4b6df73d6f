//! In-memory CMU Pronouncing Dictionary.
//!
//! # Text format
//!
//! One entry per line, the word followed by its phonemes. Alternative
//! pronunciations repeat the word with a `(N)` variant suffix:
//!
//! ```text
//! ;;; comment lines start with three semicolons
//! record R EH1 K ER0 D
//! record(2) R IH0 K AO1 R D
//! achill AE1 K IH0 L # trailing comments are allowed
//! ```
//!
//! # JSON format
//!
//! ```text
//! { "record": [["R", "EH1", "K", "ER0", "D"], ["R", "IH0", "K", "AO1", "R", "D"]] }
//! ```
//!
//! Words are lower-cased on load; pronunciations keep file order.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{DictionaryFormat, PronouncingDictionary};
use crate::error::{DictionaryError, Result};
use crate::phonetic::{Phoneme, Pronunciation};

/// Pronouncing dictionary held in a hash map.
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    entries: FxHashMap<String, Vec<Pronunciation>>,
}

impl CmuDictionary {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pronunciation for `word` (lower-cased), after any existing ones.
    /// Empty pronunciations are ignored.
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        if pronunciation.is_empty() {
            return;
        }
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
    }

    /// Parse the plain-text format from a string.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_reader(text.as_bytes())
    }

    /// Parse the plain-text format from a reader.
    pub fn from_text_reader<R: Read>(reader: R) -> Result<Self> {
        let mut dict = Self::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if let Some((word, pronunciation)) = parse_entry(&line, index + 1)? {
                dict.insert(word, pronunciation);
            }
        }

        dict.non_empty()
    }

    /// Parse the JSON format from a string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: FxHashMap<String, Vec<Vec<String>>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse the JSON format from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: FxHashMap<String, Vec<Vec<String>>> =
            serde_json::from_reader(BufReader::new(reader))?;
        Self::from_raw(raw)
    }

    /// Load a dictionary file in the given format.
    pub fn load(path: &Path, format: DictionaryFormat) -> Result<Self> {
        let file = File::open(path)?;
        let dict = match format {
            DictionaryFormat::Text => Self::from_text_reader(file)?,
            DictionaryFormat::Json => Self::from_json_reader(file)?,
        };
        tracing::info!(
            path = %path.display(),
            %format,
            words = dict.len(),
            "loaded pronouncing dictionary"
        );
        Ok(dict)
    }

    fn from_raw(raw: FxHashMap<String, Vec<Vec<String>>>) -> Result<Self> {
        let mut dict = Self::new();
        for (word, pronunciations) in raw {
            for phonemes in pronunciations {
                dict.insert(&word, phonemes.into_iter().map(Phoneme::new).collect());
            }
        }
        dict.non_empty()
    }

    fn non_empty(self) -> Result<Self> {
        if self.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(self)
    }
}

impl PronouncingDictionary for CmuDictionary {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<W: AsRef<str>> FromIterator<(W, Pronunciation)> for CmuDictionary {
    fn from_iter<I: IntoIterator<Item = (W, Pronunciation)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (word, pronunciation) in iter {
            dict.insert(word.as_ref(), pronunciation);
        }
        dict
    }
}

/// Parse one text line. `Ok(None)` for blank and comment lines.
fn parse_entry(line: &str, line_number: usize) -> Result<Option<(&str, Pronunciation)>> {
    if line.starts_with(";;;") {
        return Ok(None);
    }
    let content = match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    };

    let mut tokens = content.split_whitespace();
    let term = match tokens.next() {
        Some(term) => term,
        None => return Ok(None),
    };

    let word = strip_variant(term);
    if word.is_empty() {
        return Err(malformed(line_number, format!("invalid word `{}`", term)));
    }

    let mut phonemes = Vec::new();
    for token in tokens {
        if !is_phoneme(token) {
            return Err(malformed(
                line_number,
                format!("invalid phoneme `{}` for `{}`", token, word),
            ));
        }
        phonemes.push(Phoneme::new(token));
    }

    if phonemes.is_empty() {
        return Err(malformed(line_number, format!("no phonemes for `{}`", word)));
    }

    Ok(Some((word, Pronunciation::new(phonemes))))
}

/// `aluminium(2)` → `aluminium`
fn strip_variant(term: &str) -> &str {
    match term.strip_suffix(')').and_then(|t| t.rfind('(').map(|i| (t, i))) {
        Some((t, open)) if t[open + 1..].chars().all(|c| c.is_ascii_digit()) => &t[..open],
        _ => term,
    }
}

/// ARPABET symbol: upper-case letters with an optional trailing stress digit.
fn is_phoneme(token: &str) -> bool {
    let letters = token.trim_end_matches(|c: char| matches!(c, '0' | '1' | '2'));
    let digits = token.len() - letters.len();
    !letters.is_empty() && digits <= 1 && letters.chars().all(|c| c.is_ascii_uppercase())
}

fn malformed(line: usize, reason: String) -> DictionaryError {
    DictionaryError::MalformedEntry { line, reason }
}
