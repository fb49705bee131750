//! Rule categories.
//!
//! The set of checks is closed: every category is a variant of [`Category`],
//! and each one is backed either by a word list or by a fixed template.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A style rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Auxiliary verb followed by a past participle ("was written").
    Passive,
    /// Vague qualifiers ("many", "are a number").
    Weasel,
    /// Phrases with a shorter equivalent ("in order to").
    Wordy,
    /// Adverbs that usually weaken a verb ("suspiciously").
    Adverb,
    /// Overused stock phrases ("wrong side of the bed").
    Cliche,
    /// Accidentally doubled adjacent words ("the the").
    Illusion,
}

impl Category {
    /// Every category, in canonical reporting order.
    pub const ALL: [Self; 6] = [
        Self::Passive,
        Self::Weasel,
        Self::Wordy,
        Self::Adverb,
        Self::Cliche,
        Self::Illusion,
    ];

    /// Returns the category identifier used in config files and output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Weasel => "weasel",
            Self::Wordy => "wordy",
            Self::Adverb => "adverb",
            Self::Cliche => "cliche",
            Self::Illusion => "illusion",
        }
    }

    /// Short human-readable description of what the category flags.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Passive => "passive voice",
            Self::Weasel => "weasel word",
            Self::Wordy => "wordy phrase",
            Self::Adverb => "adverb",
            Self::Cliche => "cliche",
            Self::Illusion => "repeated word",
        }
    }

    /// Whether the category is a plain alternation over its word list.
    ///
    /// Passive voice and lexical illusions use fixed templates instead.
    pub const fn is_alternation(&self) -> bool {
        !matches!(self, Self::Passive | Self::Illusion)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Sort and deduplicate categories into canonical order.
pub fn canonical(categories: impl IntoIterator<Item = Category>) -> Vec<Category> {
    let mut list: Vec<Category> = categories.into_iter().collect();
    list.sort_unstable();
    list.dedup();
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Cliche".parse::<Category>(), Ok(Category::Cliche));
        assert_eq!(" PASSIVE ".parse::<Category>(), Ok(Category::Passive));
    }

    #[test]
    fn unknown_name_errors() {
        let err = "jargon".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: jargon");
    }

    #[test]
    fn templates_are_not_alternations() {
        assert!(!Category::Passive.is_alternation());
        assert!(!Category::Illusion.is_alternation());
        assert!(Category::Weasel.is_alternation());
    }

    #[test]
    fn canonical_orders_and_dedups() {
        let list = canonical([Category::Illusion, Category::Passive, Category::Illusion]);
        assert_eq!(list, vec![Category::Passive, Category::Illusion]);
    }

    #[test]
    fn deserializes_lowercase() {
        let c: Category = serde_json::from_str("\"adverb\"").unwrap();
        assert_eq!(c, Category::Adverb);
    }
}
