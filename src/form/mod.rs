//! Named-form classification.
//!
//! [`FormClassifier`] runs the whole pipeline: tokenize, scan stress,
//! detect rhyme, match metre/rhyme/stanza templates, then walk the ordered
//! rule table in [`rules`].
//!
//! # Example
//!
//! ```rust
//! use poetics::dictionary::CmuDictionary;
//! use poetics::form::{Form, FormClassifier};
//! use poetics::profile::English;
//!
//! let dict = CmuDictionary::from_text("an AE1 N\nold OW1 L D\npond P AA1 N D\n").unwrap();
//! let profile = English::new();
//! let classifier = FormClassifier::new(&dict, &profile);
//!
//! let analysis = classifier.analyze_text("an old pond\nan old pond");
//! assert_eq!(analysis.line_lengths, vec![3, 3]);
//! assert_eq!(analysis.form, Form::Unknown);
//! ```

pub mod rules;

use std::fmt;

use serde::Serialize;

pub use rules::{apply_rules, Features, FormRule, FORM_RULES};

use crate::diagnostics::Diagnostics;
use crate::dictionary::PronouncingDictionary;
use crate::poem::Poem;
use crate::profile::LanguageProfile;
use crate::rhyme::{RhymeDetector, RhymeScheme};
use crate::stress::{StressAnalyzer, StressPattern};
use crate::template::tables::{METRES, RHYMES, STANZAS};
use crate::template::{best_match, Match};

/// A recognised poetic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Form {
    /// Three lines of about 5, 7, 5 syllables
    Haiku,
    /// Five lines of 1, 2, 3, 4, 10 syllables
    Tetractys,
    /// Five lines, long long short short long
    Limerick,
    /// Five lines of about 5, 7, 5, 7, 7 syllables
    Tanka,
    /// Five unrhymed lines
    Cinquain,
    /// Eight rima lines of 10 to 12 syllables
    OttavaRima,
    /// Fourteen lines in iambic pentameter with a Shakespearean scheme
    ShakespeareanSonnet,
    /// Any other fourteen-line poem
    Sonnet {
        /// The guessed metre
        metre: String,
    },
    /// Fifteen lines
    Rondeau,
    /// Alternate rhyme in iambic tetrameter
    BalladStanza,
    /// Rhymed couplets in iambic pentameter
    HeroicCouplets,
    /// Iambic pentameter
    BlankVerse,
    /// Nothing matched
    Unknown,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Haiku => write!(f, "haiku"),
            Form::Tetractys => write!(f, "tetractys"),
            Form::Limerick => write!(f, "limerick"),
            Form::Tanka => write!(f, "tanka"),
            Form::Cinquain => write!(f, "cinquain"),
            Form::OttavaRima => write!(f, "ottava rima"),
            Form::ShakespeareanSonnet => write!(f, "Shakespearean sonnet"),
            Form::Sonnet { metre } => write!(f, "sonnet with {} or irregular meter", metre),
            Form::Rondeau => write!(f, "rondeau"),
            Form::BalladStanza => write!(f, "ballad stanza"),
            Form::HeroicCouplets => write!(f, "heroic couplets"),
            Form::BlankVerse => write!(f, "blank verse"),
            Form::Unknown => write!(f, "unknown form"),
        }
    }
}

impl From<Form> for String {
    fn from(form: Form) -> Self {
        form.to_string()
    }
}

/// Intermediate artifacts of one classification.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The classified form
    pub form: Form,
    /// Stress patterns of the non-blank lines
    pub stress: Vec<StressPattern>,
    /// Syllables per non-blank line
    pub line_lengths: Vec<usize>,
    /// Nearest metre template
    pub metre: Option<Match<'static>>,
    /// Rhyme label of every line, stanza breaks included
    pub rhyme_scheme: RhymeScheme,
    /// Nearest rhyme template
    pub rhyme: Option<Match<'static>>,
    /// Comma-separated stanza lengths, e.g. `"4,4,4,2"`
    pub stanza_lengths: String,
    /// Nearest stanza template
    pub stanza: Option<Match<'static>>,
    /// Words estimated instead of looked up, in first-seen order
    pub unknown_words: Vec<String>,
}

impl Analysis {
    /// Name of the guessed metre, empty if there is none.
    pub fn metre_name(&self) -> &'static str {
        self.metre.map_or("", |m| m.name)
    }

    /// Name of the guessed rhyme type, empty if there is none.
    pub fn rhyme_name(&self) -> &'static str {
        self.rhyme.map_or("", |m| m.name)
    }

    /// Name of the guessed stanza type, empty if there is none.
    pub fn stanza_name(&self) -> &'static str {
        self.stanza.map_or("", |m| m.name)
    }

    /// Number of non-blank lines.
    pub fn line_count(&self) -> usize {
        self.line_lengths.len()
    }
}

/// Classifies poems into named forms.
pub struct FormClassifier<'a, D: ?Sized, P: ?Sized> {
    dictionary: &'a D,
    profile: &'a P,
}

impl<'a, D, P> FormClassifier<'a, D, P>
where
    D: PronouncingDictionary + ?Sized,
    P: LanguageProfile + ?Sized,
{
    /// Create a classifier over a dictionary and language profile.
    pub fn new(dictionary: &'a D, profile: &'a P) -> Self {
        Self {
            dictionary,
            profile,
        }
    }

    /// Stress analyzer sharing this classifier's collaborators.
    pub fn stress_analyzer(&self) -> StressAnalyzer<'a, D, P> {
        StressAnalyzer::new(self.dictionary, self.profile)
    }

    /// Rhyme detector sharing this classifier's collaborators.
    pub fn rhyme_detector(&self) -> RhymeDetector<'a, D, P> {
        RhymeDetector::new(self.dictionary, self.profile)
    }

    /// Tokenize with the profile, then [`analyze`](Self::analyze).
    pub fn analyze_text(&self, text: &str) -> Analysis {
        self.analyze(&self.profile.tokenize(text))
    }

    /// Run the full pipeline and keep every intermediate artifact.
    pub fn analyze(&self, poem: &Poem) -> Analysis {
        let mut diagnostics = Diagnostics::new();

        let stress: Vec<StressPattern> = self
            .stress_analyzer()
            .scan(poem, &mut diagnostics)
            .into_iter()
            .filter(|pattern| !pattern.is_empty())
            .collect();
        let line_lengths: Vec<usize> = stress.iter().map(StressPattern::len).collect();
        let metre = best_match(&stress, METRES);

        let rhyme_scheme = self.rhyme_detector().detect(poem);
        let rhyme = best_match(rhyme_scheme.without_breaks().as_str(), RHYMES);

        let stanza_lengths = poem.stanza_lengths();
        let stanza = best_match(stanza_lengths.as_str(), STANZAS);

        let form = apply_rules(&Features {
            lengths: &line_lengths,
            metre: metre.map_or("", |m| m.name),
            rhyme: rhyme.map_or("", |m| m.name),
        });

        tracing::debug!(
            profile = self.profile.name(),
            lines = line_lengths.len(),
            metre = ?metre,
            rhyme_scheme = %rhyme_scheme,
            rhyme = ?rhyme,
            stanza_lengths = %stanza_lengths,
            stanza = ?stanza,
            form = %form,
            "classified poem"
        );

        Analysis {
            form,
            stress,
            line_lengths,
            metre,
            rhyme_scheme,
            rhyme,
            stanza_lengths,
            stanza,
            unknown_words: diagnostics.into_unknown_words(),
        }
    }

    /// The form of a tokenized poem.
    pub fn classify(&self, poem: &Poem) -> Form {
        self.analyze(poem).form
    }

    /// The form of raw poem text.
    pub fn classify_text(&self, text: &str) -> Form {
        self.analyze_text(text).form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CmuDictionary;
    use crate::profile::English;

    fn dictionary() -> CmuDictionary {
        CmuDictionary::from_text(
            "the DH AH0\n\
             cat K AE1 T\n\
             sat S AE1 T\n\
             dog D AO1 G\n\
             log L AO1 G\n",
        )
        .unwrap()
    }

    #[test]
    fn test_form_display() {
        assert_eq!(Form::Haiku.to_string(), "haiku");
        assert_eq!(Form::OttavaRima.to_string(), "ottava rima");
        assert_eq!(Form::Unknown.to_string(), "unknown form");
        assert_eq!(
            serde_json::to_string(&Form::HeroicCouplets).unwrap(),
            "\"heroic couplets\""
        );
    }

    #[test]
    fn test_analysis_artifacts() {
        let dict = dictionary();
        let profile = English::new();
        let classifier = FormClassifier::new(&dict, &profile);

        let analysis = classifier.analyze_text("the cat\nthe dog\n\nsat the log\nthe sat");
        assert_eq!(analysis.line_lengths, vec![2, 2, 3, 2]);
        assert_eq!(analysis.rhyme_scheme.to_string(), "ab ba");
        assert_eq!(analysis.stanza_lengths, "2,2");
        assert!(analysis.unknown_words.is_empty());
        assert!(analysis.metre.is_some());
    }

    #[test]
    fn test_unknown_words_scoped_per_call() {
        let dict = dictionary();
        let profile = English::new();
        let classifier = FormClassifier::new(&dict, &profile);

        let first = classifier.analyze_text("the zorp");
        let second = classifier.analyze_text("the cat");
        assert_eq!(first.unknown_words, ["zorp"]);
        assert!(second.unknown_words.is_empty());
    }

    #[test]
    fn test_empty_poem() {
        let dict = dictionary();
        let profile = English::new();
        let classifier = FormClassifier::new(&dict, &profile);

        let analysis = classifier.analyze_text("");
        assert_eq!(analysis.line_count(), 0);
        assert_eq!(analysis.rhyme_scheme.to_string(), " ");
        assert_eq!(analysis.form, Form::Unknown);
    }
}
