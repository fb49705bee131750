//! Pattern compilation.
//!
//! Turns a category's rule data into a [`CompiledPattern`]. Alternation
//! categories become a case-insensitive, word-bounded alternation of their
//! entries; passive voice and lexical illusions use fixed templates.
//!
//! Compilation happens once at startup. Any error here is a configuration
//! problem, not something a caller retries per input.
//!
//! `\w` and `\b` are Unicode-aware, so accented words are single words.
//! On non-ASCII input a Unicode `\b` keeps the regex crate off its DFA
//! engines, and scanning long non-ASCII documents is markedly slower than
//! ASCII ones (seconds rather than milliseconds per MiB for the larger lists).

use regex::Regex;

use crate::category::Category;
use crate::dictionaries::irregular_verbs::PASSIVE_AUXILIARIES;
use crate::error::{PatternError, PatternResult};
use crate::illusion;
use crate::matcher::{self, MatchResult};
use crate::word_lists::RuleData;

/// Word tokenizer used by the lexical illusion rule.
const WORD_TOKEN: &str = r"\w+";

/// A precompiled matcher for one category.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    category: Category,
    regex: Regex,
}

impl CompiledPattern {
    /// The category this pattern detects.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The generated regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Run the pattern against `text`.
    ///
    /// Matches come back left to right without overlap. Lexical illusions
    /// tokenize first and then keep only adjacent repeats.
    #[tracing::instrument(skip_all, fields(category = %self.category, text_len = text.len()))]
    pub fn run(&self, text: &str) -> MatchResult {
        let found = matcher::find_all(&self.regex, text);
        let matches = match self.category {
            Category::Illusion => illusion::doubled_words(found),
            Category::Passive
            | Category::Weasel
            | Category::Wordy
            | Category::Adverb
            | Category::Cliche => found,
        };
        tracing::trace!(matches = matches.len(), "pattern run");
        MatchResult::new(text, matches)
    }
}

/// Run a compiled pattern against `text`.
pub fn run(pattern: &CompiledPattern, text: &str) -> MatchResult {
    pattern.run(text)
}

/// Compile the pattern for `category` from `data`.
#[tracing::instrument(skip(data))]
pub fn compile(category: Category, data: &RuleData) -> PatternResult<CompiledPattern> {
    let words = data.words(category);
    let source = match category {
        Category::Illusion => WORD_TOKEN.to_string(),
        Category::Passive => passive_source(category, words)?,
        Category::Weasel | Category::Wordy | Category::Adverb | Category::Cliche => {
            alternation_source(category, words)?
        }
    };

    let regex = Regex::new(&source).map_err(|source| PatternError::Regex { category, source })?;
    tracing::debug!(%category, entries = words.len(), "compiled pattern");
    Ok(CompiledPattern { category, regex })
}

/// `\b(?:w1|w2|...)\b`, case-insensitive, entries escaped and in list order.
fn alternation_source(category: Category, words: &[String]) -> PatternResult<String> {
    if words.is_empty() {
        return Err(PatternError::EmptyWordList { category });
    }
    let alternation = escaped_alternation(category, words)?;
    Ok(format!(r"(?i)\b(?:{alternation})\b"))
}

/// Auxiliary, optional whitespace, then a regular `-ed` or irregular participle.
fn passive_source(category: Category, irregulars: &[String]) -> PatternResult<String> {
    let auxiliaries = PASSIVE_AUXILIARIES.join("|");
    let tail = if irregulars.is_empty() {
        r"\w+ed".to_string()
    } else {
        format!(r"\w+ed|{}", escaped_alternation(category, irregulars)?)
    };
    Ok(format!(r"(?i)\b(?:{auxiliaries})\b\s*(?:{tail})\b"))
}

fn escaped_alternation(category: Category, words: &[String]) -> PatternResult<String> {
    let mut parts = Vec::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let word = word.trim();
        if word.is_empty() {
            return Err(PatternError::EmptyEntry { category, index });
        }
        parts.push(regex::escape(word));
    }
    Ok(parts.join("|"))
}
