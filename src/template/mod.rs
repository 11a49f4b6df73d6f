//! Nearest-template classification by edit distance.
//!
//! Two modes:
//!
//! - **Whole string** ([`Observed::Whole`]): each template is repeated
//!   cyclically and cut to the observed length, then compared once. Used for
//!   rhyme schemes and stanza signatures.
//! - **Per line** ([`Observed::Lines`]): each line is compared with the raw
//!   template and distances are summed per template. Used for metre.
//!
//! The template with the smallest total wins; ties go to the template
//! declared first.
//!
//! # Example
//!
//! ```rust
//! use poetics::template::{best_match, tables::RHYMES};
//!
//! let best = best_match("ababcdcdefefgg", RHYMES).unwrap();
//! assert_eq!(best.name, "shakespearean sonnet");
//! assert_eq!(best.distance, 0);
//! ```

pub mod tables;

use smallvec::SmallVec;

use crate::distance::{chars_distance, standard_distance};

/// A named reference pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    /// Name reported when this template wins
    pub name: &'a str,
    /// Canonical pattern
    pub pattern: &'a str,
}

impl<'a> Template<'a> {
    /// Create a template.
    pub const fn new(name: &'a str, pattern: &'a str) -> Self {
        Self { name, pattern }
    }
}

/// A template's total distance from an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Match<'a> {
    /// Template name
    pub name: &'a str,
    /// Summed edit distance
    pub distance: usize,
}

/// What is being classified.
#[derive(Debug, Clone, Copy)]
pub enum Observed<'o, S = String> {
    /// One string, compared against cyclically expanded templates
    Whole(&'o str),
    /// One string per line, each compared against raw templates
    Lines(&'o [S]),
}

impl<'o> From<&'o str> for Observed<'o> {
    fn from(observed: &'o str) -> Self {
        Observed::Whole(observed)
    }
}

impl<'o> From<&'o String> for Observed<'o> {
    fn from(observed: &'o String) -> Self {
        Observed::Whole(observed.as_str())
    }
}

impl<'o, S: AsRef<str>> From<&'o [S]> for Observed<'o, S> {
    fn from(lines: &'o [S]) -> Self {
        Observed::Lines(lines)
    }
}

impl<'o, S: AsRef<str>> From<&'o Vec<S>> for Observed<'o, S> {
    fn from(lines: &'o Vec<S>) -> Self {
        Observed::Lines(lines.as_slice())
    }
}

/// Repeat `pattern` until it covers `len` characters, then cut it to
/// exactly `len`. An empty pattern stays empty.
///
/// ```rust
/// use poetics::template::expand_cyclic;
///
/// assert_eq!(expand_cyclic("aabba", 7), "aabbaaa");
/// assert_eq!(expand_cyclic("ababcdcd", 4), "abab");
/// ```
pub fn expand_cyclic(pattern: &str, len: usize) -> String {
    pattern.chars().cycle().take(len).collect()
}

/// Distance of every template from the observation, in declaration order.
pub fn score_all<'t, 'o, S>(
    observed: impl Into<Observed<'o, S>>,
    templates: &'t [Template<'t>],
) -> Vec<Match<'t>>
where
    S: AsRef<str> + 'o,
{
    match observed.into() {
        Observed::Whole(observed) => {
            let observed_chars: SmallVec<[char; 32]> = observed.chars().collect();
            templates
                .iter()
                .map(|template| {
                    let expanded: SmallVec<[char; 32]> = template
                        .pattern
                        .chars()
                        .cycle()
                        .take(observed_chars.len())
                        .collect();
                    Match {
                        name: template.name,
                        distance: chars_distance(&observed_chars, &expanded),
                    }
                })
                .collect()
        }
        Observed::Lines(lines) => templates
            .iter()
            .map(|template| Match {
                name: template.name,
                distance: lines
                    .iter()
                    .map(|line| standard_distance(line.as_ref(), template.pattern))
                    .sum(),
            })
            .collect(),
    }
}

/// The template nearest to the observation, or `None` for an empty table.
///
/// Never returns a template whose distance exceeds another's; among equal
/// distances the first declared wins.
pub fn best_match<'t, 'o, S>(
    observed: impl Into<Observed<'o, S>>,
    templates: &'t [Template<'t>],
) -> Option<Match<'t>>
where
    S: AsRef<str> + 'o,
{
    let scores = score_all(observed, templates);
    let mut best: Option<Match<'t>> = None;
    for candidate in scores {
        tracing::trace!(template = candidate.name, distance = candidate.distance, "template score");
        match best {
            Some(current) if current.distance <= candidate.distance => {}
            _ => best = Some(candidate),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::tables::{METRES, RHYMES, STANZAS};
    use super::*;

    #[test]
    fn test_expand_cyclic() {
        assert_eq!(expand_cyclic("XXXX", 5), "XXXXX");
        assert_eq!(expand_cyclic("14,", 2), "14");
        assert_eq!(expand_cyclic("", 3), "");
        assert_eq!(expand_cyclic("ab", 0), "");
    }

    #[test]
    fn test_whole_string_rhymes() {
        assert_eq!(best_match("aabbccdd", RHYMES).unwrap().name, "couplets");
        assert_eq!(best_match("abab", RHYMES).unwrap().name, "alternate rhyme");
        assert_eq!(best_match("XXXXX", RHYMES).unwrap().name, "no rhyme");
        assert_eq!(
            best_match("ababcdcdefefgg", RHYMES).unwrap().name,
            "shakespearean sonnet"
        );
    }

    #[test]
    fn test_ties_go_to_first_declared() {
        // "aabbaaabCaabbaC" cut to five characters is "aabba"
        let scores = score_all("aabba", RHYMES);
        let zero: Vec<_> = scores.iter().filter(|m| m.distance == 0).map(|m| m.name).collect();
        assert_eq!(zero, ["rondeau rhyme", "limerick"]);
        assert_eq!(best_match("aabba", RHYMES).unwrap().name, "rondeau rhyme");

        let swapped = [
            Template::new("limerick", "aabba"),
            Template::new("rondeau rhyme", "aabbaaabCaabbaC"),
        ];
        assert_eq!(best_match("aabba", &swapped).unwrap().name, "limerick");
    }

    #[test]
    fn test_whole_string_stanzas() {
        assert_eq!(best_match("14", STANZAS).unwrap().name, "sonnet");
        assert_eq!(best_match("4,4,4,4", STANZAS).unwrap().name, "quatrains");
        assert_eq!(best_match("3,3,3", STANZAS).unwrap().name, "tercets");
    }

    #[test]
    fn test_per_line_metre() {
        let lines = vec!["0101010101".to_string(), "1101010101".to_string()];
        let best = best_match(&lines, METRES).unwrap();
        assert_eq!(best.name, "iambic pentameter");
        assert_eq!(best.distance, 1);

        let trochees = ["10101010", "10101011"];
        assert_eq!(
            best_match(&trochees[..], METRES).unwrap().name,
            "trochaic tetrameter"
        );
    }

    #[test]
    fn test_per_line_sums() {
        let lines = ["010101", "0101010101"];
        let scores = score_all(&lines[..], METRES);
        assert_eq!(scores.len(), METRES.len());
        // trimeter: 0 + 4, pentameter: 4 + 0
        assert_eq!(scores[0].distance, 4);
        assert_eq!(scores[2].distance, 4);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let templates = [Template::new("first", "ab"), Template::new("second", "ba")];
        assert_eq!(best_match("aa", &templates).unwrap().name, "first");
        let reversed = [Template::new("second", "ba"), Template::new("first", "ab")];
        assert_eq!(best_match("aa", &reversed).unwrap().name, "second");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(best_match("abc", &[]).is_none());
        // Empty observation: every template scores zero, first one wins
        assert_eq!(best_match("", RHYMES).unwrap().name, "couplets");
        let no_lines: [&str; 0] = [];
        assert_eq!(best_match(&no_lines[..], METRES).unwrap().distance, 0);
    }

    #[test]
    fn test_minimality() {
        let observed = "abbaXXcc";
        let best = best_match(observed, RHYMES).unwrap();
        for candidate in score_all(observed, RHYMES) {
            assert!(best.distance <= candidate.distance);
        }
    }
}
