//! Split raw poem text into lines of word tokens.
//!
//! Normalization, in order:
//!
//! 1. hyphens and em-dashes become spaces, so "sun-bright" is two words
//! 2. diacritics are stripped (NFKD, combining marks dropped)
//! 3. anything that is not an ASCII letter or digit, whitespace or an
//!    apostrophe is removed; apostrophes survive so "o'er" and "'tis" can
//!    still be found in the dictionary
//! 4. a trailing elided `'d` is spelled out: "belov'd" becomes "beloved"

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::poem::{Line, Poem};

/// Tokenize poem text into a [`Poem`].
///
/// Lines are split on `\n`; words on whitespace. A line left with no words
/// becomes a stanza break. Never fails, and the same text always yields the
/// same poem.
///
/// ```rust
/// use poetics::tokenizer::tokenize;
///
/// let poem = tokenize("Belov'd, the sun-bright café!\n\nO'er");
/// assert_eq!(poem.lines()[0].words(), ["Beloved", "the", "sun", "bright", "cafe"]);
/// assert!(poem.lines()[1].is_stanza_break());
/// assert_eq!(poem.lines()[2].words(), ["O'er"]);
/// ```
pub fn tokenize(text: &str) -> Poem {
    text.split('\n').map(tokenize_line).collect()
}

/// Tokenize a single line of text.
pub fn tokenize_line(text: &str) -> Line {
    let cleaned = clean(text);
    cleaned.split_whitespace().map(expand_elision).collect()
}

fn clean(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '-' | '\u{2014}' => ' ',
            other => other,
        })
        .nfkd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '\'')
        .collect()
}

fn expand_elision(word: &str) -> String {
    match word.strip_suffix("'d") {
        Some(stem) => format!("{}ed", stem),
        None => word.to_string(),
    }
}
