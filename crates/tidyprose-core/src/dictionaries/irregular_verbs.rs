//! Verb dictionaries for passive voice detection.
//!
//! Contains the auxiliaries that introduce a passive construction and the
//! irregular past participles that do not end in "-ed".

/// Auxiliary verbs that introduce passive constructions.
pub static PASSIVE_AUXILIARIES: &[&str] = &["am", "are", "were", "being", "is", "been", "was", "be"];

/// Irregular past participles.
pub static PASSIVE_IRREGULARS: &[&str] = &[
    "awoken", "been", "born", "beat", "become", "begun", "bent", "beset", "bet", "bid",
    "bidden", "bound", "bitten", "bled", "blown", "broken", "bred", "brought", "broadcast",
    "built", "burnt", "burst", "bought", "cast", "caught", "chosen", "clung", "come", "cost",
    "crept", "cut", "dealt", "dug", "dived", "done", "drawn", "dreamt", "driven", "drunk",
    "eaten", "fallen", "fed", "felt", "fought", "found", "fit", "fled", "flung", "flown",
    "forbidden", "forecast", "foregone", "foreseen", "foretold", "forgotten", "forgiven",
    "forsaken", "frozen", "gotten", "given", "gone", "ground", "grown", "hung", "heard",
    "hidden", "hit", "held", "hurt", "kept", "knelt", "knit", "known", "laid", "led", "leapt",
    "learnt", "left", "lent", "let", "lain", "lighted", "lost", "made", "meant", "met",
    "misspelt", "mistaken", "mown", "overcome", "overdone", "overtaken", "overthrown", "paid",
    "pled", "proven", "put", "quit", "read", "rid", "ridden", "rung", "risen", "run", "sawn",
    "said", "seen", "sought", "sold", "sent", "set", "sewn", "shaken", "shaven", "shorn",
    "shed", "shone", "shod", "shot", "shown", "shrunk", "shut", "sung", "sunk", "sat", "slept",
    "slain", "slid", "slung", "slit", "smitten", "sown", "spoken", "sped", "spent", "spilt",
    "spun", "spit", "split", "spread", "sprung", "stood", "stolen", "stuck", "stung", "stunk",
    "stridden", "struck", "strung", "striven", "sworn", "swept", "swollen", "swum", "swung",
    "taken", "taught", "torn", "told", "thought", "thrived", "thrown", "thrust", "trodden",
    "understood", "upheld", "upset", "woken", "worn", "woven", "wed", "wept", "wound", "won",
    "withheld", "withstood", "wrung", "written",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participles_are_lowercase_single_words() {
        for p in PASSIVE_IRREGULARS {
            assert!(p.chars().all(|c| c.is_ascii_lowercase()), "{p}");
        }
        assert!(PASSIVE_IRREGULARS.contains(&"taught"));
    }
}
