//! Tokenized poem representation.

use std::fmt;

/// One line of a poem: its word tokens in source order.
///
/// A stanza break is a line holding a single empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    words: Vec<String>,
}

impl Line {
    /// Build a line from word tokens. No tokens at all is normalized to the
    /// stanza-break marker.
    pub fn new(words: Vec<String>) -> Self {
        if words.is_empty() {
            Self::stanza_break()
        } else {
            Self { words }
        }
    }

    /// The stanza-break marker line.
    pub fn stanza_break() -> Self {
        Self {
            words: vec![String::new()],
        }
    }

    /// Word tokens in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True for the stanza-break marker.
    pub fn is_stanza_break(&self) -> bool {
        self.words.iter().all(String::is_empty)
    }

    /// The last token, used for rhyme comparison.
    pub fn last_word(&self) -> &str {
        self.words.last().map(String::as_str).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<S> for Line {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Line::new(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// A poem: lines in source order, never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<Line>,
}

impl Poem {
    /// Wrap a sequence of lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Lines in order, stanza breaks included.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines, stanza breaks included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the poem has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Comma-separated count of lines per stanza, e.g. `"4,4,4,2"`.
    ///
    /// Every stanza break closes the current stanza, so two consecutive
    /// breaks emit a `0`. A final stanza with no trailing break is still
    /// counted.
    ///
    /// ```rust
    /// use poetics::tokenizer::tokenize;
    ///
    /// let poem = tokenize("one\ntwo\n\nthree");
    /// assert_eq!(poem.stanza_lengths(), "2,1");
    /// ```
    pub fn stanza_lengths(&self) -> String {
        let mut stanzas = Vec::new();
        let mut current = 0usize;

        for line in &self.lines {
            if line.is_stanza_break() {
                stanzas.push(current.to_string());
                current = 0;
            } else {
                current += 1;
            }
        }
        if current != 0 {
            stanzas.push(current.to_string());
        }

        stanzas.join(",")
    }
}

impl FromIterator<Line> for Poem {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Poem::new(iter.into_iter().collect())
    }
}
