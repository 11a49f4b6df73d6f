//! Pronouncing dictionary abstractions.
//!
//! The analysis pipeline only needs one capability from a dictionary: given
//! a lower-cased word, return its alternative pronunciations. Any storage
//! can provide that by implementing [`PronouncingDictionary`]; the crate
//! ships [`CmuDictionary`], an in-memory table loaded from the CMU
//! Pronouncing Dictionary in its plain-text or JSON form.

pub mod cmu;

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use crate::phonetic::Pronunciation;

pub use cmu::CmuDictionary;

/// Word → pronunciations lookup.
///
/// Implementations are read-only once constructed. A miss is a normal
/// outcome, not an error.
pub trait PronouncingDictionary {
    /// Alternative pronunciations of `word`, which callers pass lower-cased.
    ///
    /// Returns `None` for unknown words. An empty slice is treated the same
    /// as `None` by the pipeline.
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]>;

    /// Number of distinct words.
    fn len(&self) -> usize;

    /// Check if the dictionary is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a word has at least one pronunciation
    fn contains(&self, word: &str) -> bool {
        self.pronunciations(word).is_some_and(|p| !p.is_empty())
    }
}

impl<S: BuildHasher> PronouncingDictionary for HashMap<String, Vec<Pronunciation>, S> {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.get(word).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<D: PronouncingDictionary + ?Sized> PronouncingDictionary for &D {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).pronunciations(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// On-disk dictionary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// `cmudict.dict` text: `word PH1 PH2 ...` per line
    Text,
    /// `cmudict.json`: `{ "word": [["PH1", "PH2"], ...] }`
    Json,
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_dictionary() {
        let mut map: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        map.insert("cat".into(), vec![Pronunciation::parse("K AE1 T")]);
        map.insert("empty".into(), Vec::new());

        assert_eq!(PronouncingDictionary::len(&map), 2);
        assert!(map.contains("cat"));
        assert!(!map.contains("empty"));
        assert!(map.pronunciations("dog").is_none());
    }

    #[test]
    fn test_reference_forwarding() {
        let mut map: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        map.insert("day".into(), vec![Pronunciation::parse("D EY1")]);
        fn knows_day(dict: impl PronouncingDictionary) -> bool {
            dict.contains("day")
        }

        let by_ref: &dyn PronouncingDictionary = &map;
        assert!(knows_day(by_ref));
        assert!(knows_day(&map));
        assert!(!by_ref.is_empty());
    }
}
