//! Curated word lists and the rule data built from them.
//!
//! The built-in lists cover weasel words, wordy phrases, adverbs and clichés.
//! [`RuleData`] pairs every category with its ordered list so the pattern
//! compiler never reaches for a global table, and so configuration can
//! extend the lists before anything is compiled.

use std::collections::{BTreeMap, HashMap};

use crate::category::Category;
use crate::dictionaries::irregular_verbs::PASSIVE_IRREGULARS;

/// Vague qualifiers that avoid a precise claim.
pub static WEASELS: &[&str] = &[
    "are a number",
    "is a number",
    "clearly",
    "completely",
    "exceedingly",
    "excellent",
    "extremely",
    "fairly",
    "few",
    "huge",
    "interestingly",
    "largely",
    "many",
    "mostly",
    "quite",
    "relatively",
    "remarkably",
    "several",
    "significantly",
    "substantially",
    "surprisingly",
    "tiny",
    "various",
    "vast",
    "very",
];

/// Phrases that have a shorter or plainer equivalent.
pub static WORDY: &[&str] = &[
    "a number of",
    "accede to",
    "accordingly",
    "adjacent to",
    "adversely impact",
    "aforementioned",
    "all of",
    "all things considered",
    "along the lines of",
    "already existing",
    "as a matter of fact",
    "as a means of",
    "as far as I'm concerned",
    "as of yet",
    "as to",
    "as yet",
    "ascertain",
    "at the present time",
    "at this point in time",
    "at this time",
    "attributable to",
    "because of the fact that",
    "by means of",
    "by virtue of",
    "close proximity",
    "commence",
    "comply with",
    "due to the fact that",
    "each and every",
    "endeavor",
    "facilitate",
    "factual evidence",
    "first and foremost",
    "for the purpose of",
    "have a tendency to",
    "honest truth",
    "if and when",
    "in a manner of speaking",
    "in a timely manner",
    "in a very real sense",
    "in accordance with",
    "in all likelihood",
    "in an effort to",
    "in excess of",
    "in lieu of",
    "in light of the fact that",
    "in order to",
    "in regard to",
    "in some instances",
    "in terms of",
    "in the near future",
    "in the process of",
    "incumbent upon",
    "irregardless",
    "is applicable to",
    "is responsible for",
    "it seems that",
    "null and void",
    "owing to the fact that",
    "pertaining to",
    "point in time",
    "prior to",
    "provided that",
    "refer back",
    "span across",
    "successfully complete",
    "the month of",
    "the point I am trying to make",
    "time period",
    "until such time as",
    "utilization",
    "utilize",
    "various different",
    "what I mean to say is",
    "whether or not",
    "with respect to",
    "with the exception of",
];

/// Adverbs that usually prop up a weak verb.
pub static ADVERBS: &[&str] = &[
    "absolutely",
    "accidentally",
    "actually",
    "angrily",
    "anxiously",
    "awkwardly",
    "badly",
    "barely",
    "basically",
    "beautifully",
    "boldly",
    "bravely",
    "briefly",
    "brightly",
    "briskly",
    "calmly",
    "carefully",
    "carelessly",
    "cautiously",
    "certainly",
    "cheerfully",
    "closely",
    "commonly",
    "constantly",
    "correctly",
    "curiously",
    "daily",
    "deeply",
    "definitely",
    "deliberately",
    "desperately",
    "directly",
    "eagerly",
    "easily",
    "effectively",
    "elegantly",
    "entirely",
    "equally",
    "especially",
    "essentially",
    "eventually",
    "exactly",
    "faithfully",
    "famously",
    "fatally",
    "ferociously",
    "fiercely",
    "finally",
    "fondly",
    "foolishly",
    "fortunately",
    "frankly",
    "frantically",
    "freely",
    "frequently",
    "fully",
    "generally",
    "generously",
    "gently",
    "gladly",
    "gracefully",
    "greatly",
    "happily",
    "hastily",
    "heavily",
    "highly",
    "honestly",
    "hopelessly",
    "hungrily",
    "immediately",
    "incredibly",
    "innocently",
    "instantly",
    "intensely",
    "kindly",
    "lazily",
    "lightly",
    "literally",
    "loudly",
    "lovingly",
    "madly",
    "merely",
    "mysteriously",
    "naturally",
    "nearly",
    "neatly",
    "nervously",
    "noisily",
    "obviously",
    "occasionally",
    "openly",
    "patiently",
    "perfectly",
    "politely",
    "poorly",
    "possibly",
    "potentially",
    "powerfully",
    "presumably",
    "promptly",
    "properly",
    "proudly",
    "quickly",
    "quietly",
    "rapidly",
    "rarely",
    "really",
    "recklessly",
    "regularly",
    "repeatedly",
    "rudely",
    "sadly",
    "seriously",
    "sharply",
    "silently",
    "simply",
    "sincerely",
    "slightly",
    "slowly",
    "smoothly",
    "softly",
    "solemnly",
    "speedily",
    "stealthily",
    "sternly",
    "strictly",
    "strongly",
    "suddenly",
    "supposedly",
    "surely",
    "suspiciously",
    "swiftly",
    "tenderly",
    "terribly",
    "thankfully",
    "thoroughly",
    "thoughtfully",
    "totally",
    "tremendously",
    "truly",
    "truthfully",
    "typically",
    "ultimately",
    "unexpectedly",
    "unfortunately",
    "usually",
    "utterly",
    "violently",
    "virtually",
    "warmly",
    "weakly",
    "wearily",
    "wildly",
    "wisely",
];

/// Overused stock phrases.
pub static CLICHES: &[&str] = &[
    "a blessing in disguise",
    "a dime a dozen",
    "actions speak louder than words",
    "add insult to injury",
    "at the drop of a hat",
    "at the end of the day",
    "avoid it like the plague",
    "back to square one",
    "barking up the wrong tree",
    "beat around the bush",
    "bent out of shape",
    "better late than never",
    "bite off more than you can chew",
    "bite the bullet",
    "break a leg",
    "break the ice",
    "bring to the table",
    "burning the midnight oil",
    "call it a day",
    "caught between a rock and a hard place",
    "costs an arm and a leg",
    "cry over spilled milk",
    "curiosity killed the cat",
    "cut to the chase",
    "devil's advocate",
    "don't count your chickens",
    "easy as pie",
    "every cloud has a silver lining",
    "get the ball rolling",
    "hit the nail on the head",
    "in the nick of time",
    "it goes without saying",
    "jump on the bandwagon",
    "keep your eyes peeled",
    "last but not least",
    "let the cat out of the bag",
    "low hanging fruit",
    "needle in a haystack",
    "on the same page",
    "piece of cake",
    "raining cats and dogs",
    "read between the lines",
    "the best of both worlds",
    "think outside the box",
    "throw in the towel",
    "time flies",
    "tip of the iceberg",
    "under the weather",
    "when pigs fly",
    "whole nine yards",
    "wrong side of the bed",
];

/// Returns the built-in list for a category.
///
/// Passive voice draws on the irregular past participles; lexical illusions
/// have no list.
pub fn builtin_words(category: Category) -> &'static [&'static str] {
    match category {
        Category::Passive => PASSIVE_IRREGULARS,
        Category::Weasel => WEASELS,
        Category::Wordy => WORDY,
        Category::Adverb => ADVERBS,
        Category::Cliche => CLICHES,
        Category::Illusion => &[],
    }
}

/// Named, ordered word lists for every category.
///
/// This is the single data source the pattern compiler reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleData {
    lists: BTreeMap<Category, Vec<String>>,
}

impl RuleData {
    /// Rule data backed by the built-in lists.
    pub fn builtin() -> Self {
        let lists = Category::ALL
            .into_iter()
            .map(|c| {
                let words = builtin_words(c).iter().map(|w| (*w).to_string()).collect();
                (c, words)
            })
            .collect();
        Self { lists }
    }

    /// Rule data with explicit lists; categories not supplied get an empty list.
    pub fn from_lists<I, W>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        let mut data = Self {
            lists: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        };
        for (category, words) in lists {
            let list = data.lists.entry(category).or_default();
            list.clear();
            list.extend(words.into_iter().map(Into::into));
        }
        data
    }

    /// The ordered list for a category.
    pub fn words(&self, category: Category) -> &[String] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append entries to a category's list.
    ///
    /// Entries already present (compared case-insensitively) are skipped.
    /// Lexical illusions take no list, so extending them only logs a warning.
    pub fn extend<I, S>(&mut self, category: Category, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if category == Category::Illusion {
            tracing::warn!(%category, "category has no word list; ignoring extra words");
            return;
        }

        let list = self.lists.entry(category).or_default();
        for word in words {
            let word = word.into();
            let trimmed = word.trim();
            if list.iter().any(|w| w.eq_ignore_ascii_case(trimmed)) {
                continue;
            }
            list.push(trimmed.to_string());
        }
        tracing::debug!(%category, len = list.len(), "extended word list");
    }

    /// Built-in rule data extended with configured extras.
    pub fn with_extra_words(extra: &HashMap<Category, Vec<String>>) -> Self {
        let mut data = Self::builtin();
        // Deterministic order for logging.
        let mut categories: Vec<_> = extra.keys().copied().collect();
        categories.sort_unstable();
        for category in categories {
            if let Some(words) = extra.get(&category) {
                data.extend(category, words.iter().cloned());
            }
        }
        data
    }
}

impl Default for RuleData {
    fn default() -> Self {
        Self::builtin()
    }
}
