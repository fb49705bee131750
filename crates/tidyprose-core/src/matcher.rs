//! Match types and the scan shared by every category.

use std::ops::Range;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A located match in the input text.
///
/// `start` and `end` are byte offsets (`end` exclusive), so
/// `&text[start..end] == match.text` always holds. Callers that need
/// character columns can derive them with [`crate::text::LineIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The matched text, with the input's original casing.
    pub text: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
}

impl Match {
    /// The byte range covered by this match.
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<regex::Match<'_>> for Match {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        }
    }
}

/// The outcome of running one category against one input.
///
/// Zero matches is an ordinary result: `matches` is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The text that was scanned.
    pub text: String,
    /// Matches in order of appearance; never overlapping.
    pub matches: Vec<Match>,
}

impl MatchResult {
    /// Pair an input with its matches.
    pub fn new(text: &str, matches: Vec<Match>) -> Self {
        Self {
            text: text.to_string(),
            matches,
        }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over the matches in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Find every non-overlapping match of `regex`, left to right.
pub fn find_all(regex: &Regex, text: &str) -> Vec<Match> {
    regex.find_iter(text).map(Match::from).collect()
}

/// Scan `text` with an arbitrary regex and wrap the matches.
pub fn scan(regex: &Regex, text: &str) -> MatchResult {
    MatchResult::new(text, find_all(regex, text))
}
