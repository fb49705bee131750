//! Text position utilities.
//!
//! Matches carry byte offsets. Reports want 1-based line and column numbers,
//! where the column counts characters rather than bytes.

use serde::{Deserialize, Serialize};

/// A 1-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Character column within the line, starting at 1.
    pub column: usize,
}

/// Precomputed line starts for repeated lookups into the same text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Index the line starts of `text`.
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Number of lines in the text (an empty text has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Locate a byte offset.
    ///
    /// Offsets past the end clamp to the end of the text. An offset inside a
    /// multi-byte character counts the characters that start before it.
    pub fn locate(&self, offset: usize) -> Location {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = self.text.as_bytes()[start..offset]
            .iter()
            .filter(|&&b| !is_utf8_continuation(b))
            .count()
            + 1;
        Location { line, column }
    }
}

const fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Locate a single byte offset in `text`.
///
/// Builds a throwaway [`LineIndex`]; prefer the index when locating many
/// offsets in the same text.
pub fn locate(text: &str, offset: usize) -> Location {
    LineIndex::new(text).locate(offset)
}
