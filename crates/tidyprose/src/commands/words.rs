//! Words command implementation

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use tidyprose_core::category::Category;
use tidyprose_core::config::Config;
use tidyprose_core::dictionaries::irregular_verbs::PASSIVE_AUXILIARIES;
use tidyprose_core::pattern;
use tidyprose_core::word_lists::RuleData;

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Category to list.
    #[arg(value_enum)]
    pub category: Category,

    /// Print the compiled regular expression instead of the word list.
    #[arg(long)]
    pub pattern: bool,
}

#[derive(Serialize)]
struct WordsOutput<'a> {
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    words: Vec<&'a str>,
}

/// Words a category matches, after config extras are merged in.
///
/// For passive these are the irregular participles.
fn effective_words(category: Category, data: &RuleData) -> Vec<&str> {
    data.words(category).iter().map(String::as_str).collect()
}

/// Print the word list or compiled pattern for a category.
#[instrument(name = "cmd_words", skip_all, fields(category = %args.category))]
pub fn cmd_words(args: WordsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(pattern = args.pattern, "executing words command");

    let data = config.rule_data();
    let compiled = pattern::compile(args.category, &data)
        .with_context(|| format!("failed to compile {} pattern", args.category))?;
    let words = effective_words(args.category, &data);

    if global_json {
        let output = WordsOutput {
            category: args.category,
            pattern: args.pattern.then(|| compiled.as_str()),
            words,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.pattern {
        println!("{}", compiled.as_str());
        return Ok(());
    }

    println!(
        "{} {}",
        args.category.as_str().bold(),
        args.category.description().dimmed()
    );
    match args.category {
        Category::Passive => {
            println!("{}: {}", "Auxiliaries".dimmed(), PASSIVE_AUXILIARIES.join(", "));
            println!("{}: any word ending in -ed, plus:", "Participles".dimmed());
        }
        Category::Illusion => {
            println!("(matches a word repeated immediately after itself)");
        }
        _ => {}
    }
    for word in &words {
        println!("  {word}");
    }

    Ok(())
}
