//! Error types for loading pronouncing dictionaries.
//!
//! The analysis pipeline itself cannot fail; only the boundary where a
//! dictionary is read and parsed returns errors.

use thiserror::Error;

/// Errors that can occur while loading a pronouncing dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Reading the dictionary source failed.
    #[error("Failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON dictionary could not be parsed.
    ///
    /// The expected shape is an object mapping each word to a list of
    /// pronunciations, each a list of phoneme strings.
    #[error("Invalid JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),

    /// A text dictionary line could not be parsed.
    #[error("Malformed dictionary entry on line {line}: {reason}")]
    MalformedEntry {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The source parsed but contained no entries.
    #[error("Dictionary contains no entries")]
    Empty,
}

/// A specialized `Result` type for dictionary loading.
pub type Result<T> = std::result::Result<T, DictionaryError>;
