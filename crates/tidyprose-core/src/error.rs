//! Error types for tidyprose-core.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while compiling rule data into patterns.
///
/// These are configuration errors: they surface once at startup when the
/// registry is built, never while matching text.
#[derive(Error, Debug)]
pub enum PatternError {
    /// An alternation category has no entries to match.
    #[error("word list for `{category}` is empty")]
    EmptyWordList {
        /// The category whose list is empty.
        category: Category,
    },

    /// A word list entry is empty or whitespace only.
    #[error("word list for `{category}` has a blank entry at index {index}")]
    EmptyEntry {
        /// The category containing the blank entry.
        category: Category,
        /// Position of the entry in the list.
        index: usize,
    },

    /// The regex engine rejected the generated pattern.
    #[error("failed to compile `{category}` pattern: {source}")]
    Regex {
        /// The category being compiled.
        category: Category,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias using [`PatternError`].
pub type PatternResult<T> = Result<T, PatternError>;
