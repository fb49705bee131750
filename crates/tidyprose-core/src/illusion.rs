//! Lexical illusion detection.
//!
//! Finds accidentally doubled words ("the the"). The word tokens come from
//! the compiled `\w+` pattern; this module only decides which of them repeat
//! their predecessor.

use crate::matcher::Match;

/// Keep the tokens whose text equals the lowercased previous token.
///
/// The comparison is one-sided: the current token is compared
/// with its original casing against the lowercase form of the token before
/// it. "The the" reports the second word, "the The" reports nothing.
/// Tokens are adjacent whenever no other word sits between them, regardless
/// of punctuation or spacing.
pub fn doubled_words(tokens: impl IntoIterator<Item = Match>) -> Vec<Match> {
    let (_, repeats) = tokens.into_iter().fold(
        (String::new(), Vec::new()),
        |(previous, mut repeats), token| {
            let lowered = token.text.to_lowercase();
            if token.text == previous {
                repeats.push(token);
            }
            (lowered, repeats)
        },
    );
    repeats
}
