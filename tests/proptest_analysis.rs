//! Property-based tests for the analysis pipeline.
//!
//! 1. **Distance**: `standard_distance` is a metric bounded by the longer
//!    string's length.
//! 2. **Tokenizer**: deterministic, one line per `\n`-separated segment.
//! 3. **Rhyme schemes**: one label per line, grouped lines really rhyme with
//!    the line that opened the group, letters are handed out in order, and
//!    repeated lines are upper-case.
//! 4. **Templates**: the best match is never beaten by another template.

use poetics::distance::standard_distance;
use poetics::prelude::*;
use poetics::template::score_all;
use poetics::template::tables::{METRES, RHYMES, STANZAS};
use proptest::prelude::*;

const DICTIONARY: &str = "\
the DH AH0
a AH0
day D EY1
away AH0 W EY1
night N AY1 T
light L AY1 T
delight D IH0 L AY1 T
stew S T UW1
through TH R UW1
water W AO1 T ER0
daughter D AO1 T ER0
record R EH1 K ER0 D
record(2) R IH0 K AO1 R D
";

const VOCABULARY: &[&str] = &[
    "the", "a", "day", "Away", "night", "light", "delight", "stew", "through", "water",
    "daughter", "record", "zorp", "quill",
];

fn dictionary() -> CmuDictionary {
    CmuDictionary::from_text(DICTIONARY).unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,16}").unwrap()
}

fn arb_scheme() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcdefX]{0,20}").unwrap()
}

fn arb_line() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..4).prop_map(|words| words.join(" "))
}

fn arb_poem() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 1..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(standard_distance(&a, &b), standard_distance(&b, &a));
    }

    #[test]
    fn distance_identity(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(standard_distance(&a, &a), 0);
        if standard_distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn distance_triangle_inequality(a in arb_string(), b in arb_string(), c in arb_string()) {
        let d_ac = standard_distance(&a, &c);
        let d_ab = standard_distance(&a, &b);
        let d_bc = standard_distance(&b, &c);
        prop_assert!(d_ac <= d_ab + d_bc, "d({}, {}) = {} > {} + {}", a, c, d_ac, d_ab, d_bc);
    }

    #[test]
    fn distance_bounded_by_longer_length(a in arb_string(), b in arb_string()) {
        let d = standard_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn tokenize_is_deterministic(text in "[a-zA-Z' \n-]{0,60}") {
        let first = tokenize(&text);
        prop_assert_eq!(&first, &tokenize(&text));
        prop_assert_eq!(first.len(), text.split('\n').count());
    }

    #[test]
    fn rhyme_scheme_has_one_label_per_line(text in arb_poem()) {
        let dict = dictionary();
        let profile = English::new();
        let poem = tokenize(&text);
        let scheme = RhymeDetector::new(&dict, &profile).detect(&poem);
        prop_assert_eq!(scheme.len(), poem.len());

        for (line, label) in poem.lines().iter().zip(scheme.labels()) {
            prop_assert_eq!(line.is_stanza_break(), *label == RhymeLabel::StanzaBreak);
        }
    }

    #[test]
    fn grouped_lines_rhyme_with_group_opener(text in arb_poem()) {
        let dict = dictionary();
        let profile = English::new();
        let poem = tokenize(&text);
        let detector = RhymeDetector::new(&dict, &profile);
        let scheme = detector.detect(&poem);
        let lines = poem.lines();

        for (i, label) in scheme.labels().iter().enumerate() {
            let RhymeLabel::Group { index, .. } = *label else { continue };
            let opener = scheme
                .labels()
                .iter()
                .position(|l| matches!(l, RhymeLabel::Group { index: other, .. } if *other == index))
                .unwrap();
            if opener != i {
                prop_assert!(
                    detector.rhymes(lines[opener].last_word(), lines[i].last_word()),
                    "line {} labeled with line {} but they do not rhyme", i, opener
                );
            }
        }
    }

    #[test]
    fn group_letters_first_appear_in_order(text in arb_poem()) {
        let dict = dictionary();
        let profile = English::new();
        let scheme = RhymeDetector::new(&dict, &profile).detect(&tokenize(&text));

        let mut next = 0u8;
        for label in scheme.labels() {
            if let RhymeLabel::Group { index, .. } = *label {
                prop_assert!(index <= next, "group {} appears before group {}", index, next);
                if index == next {
                    next += 1;
                }
            }
        }
    }

    #[test]
    fn repeated_lines_are_uppercase(text in arb_poem()) {
        let dict = dictionary();
        let profile = English::new();
        let poem = tokenize(&text);
        let scheme = RhymeDetector::new(&dict, &profile).detect(&poem);
        let lines = poem.lines();

        for (i, label) in scheme.labels().iter().enumerate() {
            if let RhymeLabel::Group { repeated, .. } = *label {
                let duplicated = lines
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && other == &lines[i]);
                prop_assert_eq!(repeated, duplicated);
                prop_assert_eq!(label.to_char().is_ascii_uppercase(), duplicated);
            }
        }
    }

    #[test]
    fn best_rhyme_match_is_minimal(observed in arb_scheme()) {
        let best = best_match(observed.as_str(), RHYMES).unwrap();
        for candidate in score_all(observed.as_str(), RHYMES) {
            prop_assert!(best.distance <= candidate.distance);
        }
    }

    #[test]
    fn best_stanza_match_is_minimal(observed in "[0-9,]{0,12}") {
        let best = best_match(observed.as_str(), STANZAS).unwrap();
        for candidate in score_all(observed.as_str(), STANZAS) {
            prop_assert!(best.distance <= candidate.distance);
        }
    }

    #[test]
    fn best_metre_match_is_minimal(lines in prop::collection::vec("[01]{1,12}", 0..8)) {
        let best = best_match(&lines, METRES).unwrap();
        for candidate in score_all(&lines, METRES) {
            prop_assert!(best.distance <= candidate.distance);
        }
    }

    #[test]
    fn analysis_lengths_match_stress(text in arb_poem()) {
        let dict = dictionary();
        let profile = English::new();
        let analysis = FormClassifier::new(&dict, &profile).analyze_text(&text);

        prop_assert_eq!(analysis.line_lengths.len(), analysis.stress.len());
        for (len, pattern) in analysis.line_lengths.iter().zip(&analysis.stress) {
            prop_assert_eq!(*len, pattern.len());
            prop_assert!(pattern.as_str().chars().all(|c| c == '0' || c == '1'));
        }
    }
}
