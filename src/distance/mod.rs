//! Edit distance between observed patterns and templates.
//!
//! Stress patterns, rhyme-scheme strings and stanza signatures are all short
//! strings, so a space-optimized two-row dynamic program is enough. Common
//! prefixes and suffixes are stripped first: a metrical line usually agrees
//! with its template at both ends.

use smallvec::SmallVec;

/// Character buffer sized for one line of stress digits or a sonnet-length
/// rhyme scheme without touching the heap.
type CharBuf = SmallVec<[char; 32]>;

/// Strip common prefix and suffix from two character slices.
///
/// Returns `(prefix_len, remaining_a, remaining_b)`, the lengths of the two
/// middles that still need an alignment.
#[inline(always)]
pub(crate) fn strip_common_affixes(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let len_a = a.len();
    let len_b = b.len();
    let min_len = len_a.min(len_b);

    let mut prefix_len = 0;
    while prefix_len < min_len && a[prefix_len] == b[prefix_len] {
        prefix_len += 1;
    }

    if prefix_len == min_len {
        return (prefix_len, len_a - prefix_len, len_b - prefix_len);
    }

    // Suffix must not overlap the prefix
    let mut suffix_len = 0;
    while suffix_len < (min_len - prefix_len)
        && a[len_a - 1 - suffix_len] == b[len_b - 1 - suffix_len]
    {
        suffix_len += 1;
    }

    (
        prefix_len,
        len_a - prefix_len - suffix_len,
        len_b - prefix_len - suffix_len,
    )
}

/// Compute the Levenshtein distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `source` into `target`. Works on `char`s, so
/// multi-byte input is measured in characters, not bytes.
///
/// # Example
///
/// ```rust
/// use poetics::distance::standard_distance;
///
/// assert_eq!(standard_distance("0101010101", "0101010101"), 0);
/// assert_eq!(standard_distance("1001010101", "0101010101"), 2);
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: CharBuf = source.chars().collect();
    let target_chars: CharBuf = target.chars().collect();
    chars_distance(&source_chars, &target_chars)
}

/// Levenshtein distance over pre-split character slices.
pub fn chars_distance(source: &[char], target: &[char]) -> usize {
    let (prefix_len, m, n) = strip_common_affixes(source, target);

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let source = &source[prefix_len..prefix_len + m];
    let target = &target[prefix_len..prefix_len + n];

    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
