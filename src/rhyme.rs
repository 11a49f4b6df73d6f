//! Rhyme-scheme detection.
//!
//! Two words rhyme when the trailing phonemes of some pair of their
//! pronunciations agree. Each line's last word is compared against the
//! last words of the lines after it, and lines that rhyme share a letter.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::dictionary::PronouncingDictionary;
use crate::phonetic::Pronunciation;
use crate::poem::{Line, Poem};
use crate::profile::LanguageProfile;

/// Number of trailing phonemes compared by default.
pub const RHYME_DEPTH: usize = 2;

/// Letters available for rhyme groups.
const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// The scheme symbol of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RhymeLabel {
    /// No rhyme found; rendered `X`
    Unassigned,
    /// Stanza break; rendered as a space
    StanzaBreak,
    /// Member of rhyme group `index` (0 = `a`); `repeated` lines duplicate
    /// another line verbatim and render upper-case
    Group {
        /// Group number in order of first appearance
        index: u8,
        /// Line is repeated verbatim elsewhere in the poem
        repeated: bool,
    },
}

impl RhymeLabel {
    /// Marker for lines without a rhyme.
    pub const UNASSIGNED: char = 'X';
    /// Marker for stanza breaks.
    pub const BLANK: char = ' ';

    /// The scheme character for this label.
    pub fn to_char(self) -> char {
        match self {
            RhymeLabel::Unassigned => Self::UNASSIGNED,
            RhymeLabel::StanzaBreak => Self::BLANK,
            RhymeLabel::Group { index, repeated } => {
                let letter = char::from(ALPHABET[usize::from(index)]);
                if repeated {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            }
        }
    }
}

/// One label per poem line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct RhymeScheme(Vec<RhymeLabel>);

impl RhymeScheme {
    /// Labels in line order.
    pub fn labels(&self) -> &[RhymeLabel] {
        &self.0
    }

    /// Number of labels, equal to the poem's line count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty poem.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The scheme string with stanza-break markers removed, as compared
    /// against rhyme templates.
    pub fn without_breaks(&self) -> String {
        self.0
            .iter()
            .filter(|label| **label != RhymeLabel::StanzaBreak)
            .map(|label| label.to_char())
            .collect()
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{}", label.to_char())?;
        }
        Ok(())
    }
}

impl From<RhymeScheme> for String {
    fn from(scheme: RhymeScheme) -> Self {
        scheme.to_string()
    }
}

/// Finds rhymes between line endings.
pub struct RhymeDetector<'a, D: ?Sized, P: ?Sized> {
    dictionary: &'a D,
    profile: &'a P,
}

impl<'a, D, P> RhymeDetector<'a, D, P>
where
    D: PronouncingDictionary + ?Sized,
    P: LanguageProfile + ?Sized,
{
    /// Create a detector over a dictionary and language profile.
    pub fn new(dictionary: &'a D, profile: &'a P) -> Self {
        Self {
            dictionary,
            profile,
        }
    }

    fn lookup(&self, word: &str) -> Option<&'a [Pronunciation]> {
        if word.is_empty() {
            return None;
        }
        self.dictionary
            .pronunciations(&word.to_lowercase())
            .filter(|p| !p.is_empty())
    }

    /// Whether two words rhyme.
    ///
    /// Unknown words never rhyme. Otherwise every pair of pronunciations
    /// is compared on its last [`RHYME_DEPTH`] phonemes, or only the last
    /// phoneme when the pronunciation of `first` has a single vowel, so
    /// that monosyllables like "stew" and "through" can match.
    ///
    /// The depth is taken from `first` alone, so the relation is not
    /// symmetric: "day" rhymes with "away", but "away" does not rhyme
    /// with "day". [`detect`](Self::detect) always passes the earlier line
    /// first.
    pub fn rhymes(&self, first: &str, second: &str) -> bool {
        let (Some(first), Some(second)) = (self.lookup(first), self.lookup(second)) else {
            return false;
        };

        first.iter().any(|a| {
            let a = self.profile.substitute_phonemes(a);
            let depth = if a.vowel_count() == 1 { 1 } else { RHYME_DEPTH };
            second.iter().any(|b| {
                let b = self.profile.substitute_phonemes(b);
                a.tail_matches(&b, depth)
            })
        })
    }

    /// Label every line of the poem.
    ///
    /// Lines are visited in order. An unlabeled line opens a new group when
    /// it rhymes with at least one later unlabeled line; every such later
    /// line joins the group. Labeled lines are never relabeled, and letters
    /// are handed out in order of first use.
    pub fn detect(&self, poem: &Poem) -> RhymeScheme {
        let lines = poem.lines();
        let repeated = repeated_lines(lines);
        let mut scheme = vec![RhymeLabel::Unassigned; lines.len()];
        let mut next_group = 0usize;
        let mut exhausted = false;

        for i in 0..lines.len() {
            if scheme[i] != RhymeLabel::Unassigned {
                continue;
            }
            if lines[i].is_stanza_break() {
                scheme[i] = RhymeLabel::StanzaBreak;
                continue;
            }

            let base = lines[i].last_word();
            let mut group = None;

            for j in (i + 1)..lines.len() {
                if scheme[j] != RhymeLabel::Unassigned || lines[j].is_stanza_break() {
                    continue;
                }
                if !self.rhymes(base, lines[j].last_word()) {
                    continue;
                }

                let index = match group {
                    Some(index) => index,
                    None if next_group < ALPHABET.len() => {
                        let index = next_group as u8;
                        next_group += 1;
                        scheme[i] = RhymeLabel::Group {
                            index,
                            repeated: repeated[i],
                        };
                        group = Some(index);
                        index
                    }
                    None => {
                        if !exhausted {
                            tracing::warn!(
                                line = i + 1,
                                "more than {} rhyme groups; leaving the rest unassigned",
                                ALPHABET.len()
                            );
                            exhausted = true;
                        }
                        break;
                    }
                };

                scheme[j] = RhymeLabel::Group {
                    index,
                    repeated: repeated[j],
                };
            }
        }

        let scheme = RhymeScheme(scheme);
        tracing::debug!(scheme = %scheme, "detected rhyme scheme");
        scheme
    }
}

/// For each line, whether an identical non-blank line occurs elsewhere.
fn repeated_lines(lines: &[Line]) -> Vec<bool> {
    let mut counts: FxHashMap<&Line, usize> = FxHashMap::default();
    for line in lines.iter().filter(|line| !line.is_stanza_break()) {
        *counts.entry(line).or_default() += 1;
    }
    lines
        .iter()
        .map(|line| counts.get(line).is_some_and(|&count| count > 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CmuDictionary;
    use crate::profile::{English, Neutral};
    use crate::tokenizer::tokenize;

    fn dictionary() -> CmuDictionary {
        CmuDictionary::from_text(
            "day D EY1\n\
             away AH0 W EY1\n\
             night N AY1 T\n\
             light L AY1 T\n\
             stew S T UW1\n\
             through TH R UW1\n\
             water W AO1 T ER0\n\
             daughter D AO1 T ER0\n\
             door D AO1 R\n\
             more M AO1 R\n\
             sing S IH1 NG\n\
             spring S P R IH1 NG\n\
             kitten K IH1 T AH0 N\n\
             mitten M IH1 T AH0 N\n\
             rose R OW1 Z\n",
        )
        .unwrap()
    }

    #[test]
    fn test_rhymes_basic() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);

        assert!(detector.rhymes("day", "away"));
        assert!(detector.rhymes("Night", "LIGHT"));
        assert!(detector.rhymes("kitten", "mitten"));
        assert!(!detector.rhymes("day", "night"));
        assert!(!detector.rhymes("rose", "day"));
    }

    #[test]
    fn test_depth_follows_first_word() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);

        // "away" has two vowels, so W EY1 is compared with D EY1
        assert!(detector.rhymes("day", "away"));
        assert!(!detector.rhymes("away", "day"));

        assert_eq!(detector.detect(&tokenize("far away\nall day")).to_string(), "XX");
        assert_eq!(detector.detect(&tokenize("all day\nfar away")).to_string(), "aa");
    }

    #[test]
    fn test_alphabet_advances_only_on_match() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);

        assert_eq!(detector.detect(&tokenize("a rose\nall day\naway")).to_string(), "Xaa");
        assert_eq!(
            detector.detect(&tokenize("a rose\nat night\nall day\nthe light\naway")).to_string(),
            "Xabab"
        );
    }

    #[test]
    fn test_rhymes_monosyllable() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        assert!(detector.rhymes("stew", "through"));
        assert!(detector.rhymes("sing", "spring"));
    }

    #[test]
    fn test_unknown_words_never_rhyme() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        assert!(!detector.rhymes("day", "brillig"));
        assert!(!detector.rhymes("brillig", "brillig"));
        assert!(!detector.rhymes("", "day"));
    }

    #[test]
    fn test_profile_substitution() {
        let dict = dictionary();
        let english = English::new();
        let neutral = Neutral::new();
        // ER0 -> R leaves "water" one vowel, so only the final R is compared
        assert!(RhymeDetector::new(&dict, &english).rhymes("water", "door"));
        assert!(!RhymeDetector::new(&dict, &neutral).rhymes("water", "door"));
        assert!(RhymeDetector::new(&dict, &neutral).rhymes("water", "daughter"));
    }

    #[test]
    fn test_detect_alternate() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        let poem = tokenize("all day\nat night\nfar away\nthe light");
        assert_eq!(detector.detect(&poem).to_string(), "abab");
    }

    #[test]
    fn test_detect_group_collects_all_matches() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        let poem = tokenize("day\naway\na rose\nday");
        let scheme = detector.detect(&poem);
        assert_eq!(scheme.to_string(), "AaXA");
    }

    #[test]
    fn test_detect_stanza_breaks_and_misses() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        let poem = tokenize("the day\n\na rose\naway\n");
        let scheme = detector.detect(&poem);
        assert_eq!(scheme.to_string(), "a Xa ");
        assert_eq!(scheme.without_breaks(), "aXa");
        assert_eq!(scheme.len(), poem.len());
    }

    #[test]
    fn test_repeated_line_uppercase() {
        let dict = dictionary();
        let profile = English::new();
        let detector = RhymeDetector::new(&dict, &profile);
        let poem = tokenize("I sing\nof night\nI sing\nof light");
        assert_eq!(detector.detect(&poem).to_string(), "AbAb");
    }

    #[test]
    fn test_label_to_char() {
        assert_eq!(RhymeLabel::Unassigned.to_char(), 'X');
        assert_eq!(RhymeLabel::StanzaBreak.to_char(), ' ');
        assert_eq!(
            RhymeLabel::Group {
                index: 2,
                repeated: false
            }
            .to_char(),
            'c'
        );
        assert_eq!(
            RhymeLabel::Group {
                index: 25,
                repeated: true
            }
            .to_char(),
            'Z'
        );
    }

    #[test]
    fn test_alphabet_exhaustion() {
        let mut dict = CmuDictionary::new();
        let mut text = String::new();
        for i in 0..30u8 {
            let word = format!("w{}", i);
            // Distinct final consonant per word, no stress digits
            let coda = format!("Q{}{}", char::from(b'A' + i / 26), char::from(b'A' + i % 26));
            dict.insert(&word, Pronunciation::parse(&format!("K AE1 {}", coda)));
            text.push_str(&format!("{}\n{}\n", word, word));
        }
        let profile = Neutral::new();
        let detector = RhymeDetector::new(&dict, &profile);
        let poem = tokenize(text.trim_end());
        let scheme = detector.detect(&poem);

        assert_eq!(scheme.len(), 60);
        assert_eq!(scheme.labels()[51], RhymeLabel::Group { index: 25, repeated: true });
        assert!(scheme.labels()[52..]
            .iter()
            .all(|label| *label == RhymeLabel::Unassigned));
    }
}
