//! Reference patterns for metres, rhyme types and stanza shapes.
//!
//! Declaration order is significant: when two templates score the same
//! distance, the one declared first wins.

use super::Template;

/// Metre names, also used by the form rules.
pub mod metre {
    /// `010101`
    pub const IAMBIC_TRIMETER: &str = "iambic trimeter";
    /// `01010101`
    pub const IAMBIC_TETRAMETER: &str = "iambic tetrameter";
    /// `0101010101`
    pub const IAMBIC_PENTAMETER: &str = "iambic pentameter";
    /// `10101010`
    pub const TROCHAIC_TETRAMETER: &str = "trochaic tetrameter";
    /// `1010101010`
    pub const TROCHAIC_PENTAMETER: &str = "trochaic pentameter";
}

/// Rhyme-type names, also used by the form rules.
pub mod rhyme {
    /// `aabb...`
    pub const COUPLETS: &str = "couplets";
    /// `abab cdcd ...`
    pub const ALTERNATE: &str = "alternate rhyme";
    /// `abba cddc ...`
    pub const ENCLOSED: &str = "enclosed rhyme";
    /// Terza/ottava rima chain
    pub const RIMA: &str = "rima";
    /// Rondeau with refrain
    pub const RONDEAU: &str = "rondeau rhyme";
    /// `ababcdcdefefgg`
    pub const SHAKESPEAREAN_SONNET: &str = "shakespearean sonnet";
    /// `aabba`
    pub const LIMERICK: &str = "limerick";
    /// Nothing rhymes
    pub const NO_RHYME: &str = "no rhyme";
}

/// Per-line metre templates, compared line by line.
pub static METRES: &[Template<'static>] = &[
    Template::new(metre::IAMBIC_TRIMETER, "010101"),
    Template::new(metre::IAMBIC_TETRAMETER, "01010101"),
    Template::new(metre::IAMBIC_PENTAMETER, "0101010101"),
    Template::new(metre::TROCHAIC_TETRAMETER, "10101010"),
    Template::new(metre::TROCHAIC_PENTAMETER, "1010101010"),
];

/// Whole-poem rhyme templates, cycled to the poem's length.
pub static RHYMES: &[Template<'static>] = &[
    Template::new(rhyme::COUPLETS, "aabbccddeeff"),
    Template::new(rhyme::ALTERNATE, "ababcdcdefefghgh"),
    Template::new(rhyme::ENCLOSED, "abbacddceffe"),
    Template::new(rhyme::RIMA, "ababcbcdcdedefefgfghg"),
    Template::new(rhyme::RONDEAU, "aabbaaabCaabbaC"),
    Template::new(rhyme::SHAKESPEAREAN_SONNET, "ababcdcdefefgg"),
    Template::new(rhyme::LIMERICK, "aabba"),
    Template::new(rhyme::NO_RHYME, "XXXX"),
];

/// Stanza-length signatures, cycled to the signature's length.
pub static STANZAS: &[Template<'static>] = &[
    Template::new("sonnet", "14,"),
    Template::new("cinquains", "5,"),
    Template::new("quatrains", "4,"),
    Template::new("tercets", "3,"),
];
