//! Syllable estimation for words missing from the dictionary.

/// Estimate the syllable count of a word.
///
/// Used only when the dictionary has no pronunciation. Implementations must
/// return at least 1 for any non-empty word.
pub trait SyllableEstimator {
    /// Estimated syllable count.
    fn estimate(&self, word: &str) -> usize;
}

impl<F> SyllableEstimator for F
where
    F: Fn(&str) -> usize,
{
    fn estimate(&self, word: &str) -> usize {
        self(word)
    }
}

/// Vowel-group heuristic for English spelling.
///
/// Counts runs of vowels (`y` included), then adjusts for a silent final
/// `e`, consonant + `le` endings and a silent `-ed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelGroupEstimator;

const VOWELS: [u8; 6] = [b'a', b'e', b'i', b'o', b'u', b'y'];

impl SyllableEstimator for VowelGroupEstimator {
    fn estimate(&self, word: &str) -> usize {
        let word: String = word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if word.is_empty() {
            return 1;
        }

        let bytes = word.as_bytes();
        let mut syllables = 0usize;
        let mut previous_was_vowel = false;

        for &b in bytes {
            let is_vowel = VOWELS.contains(&b);
            if is_vowel && !previous_was_vowel {
                syllables += 1;
            }
            previous_was_vowel = is_vowel;
        }

        let before = |suffix_len: usize| bytes.len().checked_sub(suffix_len + 1).map(|i| bytes[i]);

        // Silent final e ("hope"), kept after d, t and n
        if word.ends_with('e') && syllables > 1 {
            if let Some(ch) = before(1) {
                if !matches!(ch, b'd' | b't' | b'n') {
                    syllables -= 1;
                }
            }
        }

        // Consonant + le: "table", "candle"
        if word.len() >= 3 && word.ends_with("le") {
            if let Some(ch) = before(2) {
                if !VOWELS.contains(&ch) {
                    syllables += 1;
                }
            }
        }

        // Silent -ed: "walked", but not "wanted" or "faded"
        if word.ends_with("ed") && syllables > 1 {
            if let Some(ch) = before(2) {
                if !matches!(ch, b't' | b'd') {
                    syllables -= 1;
                }
            }
        }

        syllables.max(1)
    }
}
