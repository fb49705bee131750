//! Check command: run style categories over files or inline text.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use tidyprose_core::category::{self, Category};
use tidyprose_core::config::Config;
use tidyprose_core::lint::{self, LintReport};
use tidyprose_core::registry::PatternRegistry;
use tidyprose_core::rules::RuleSet;

use super::read_input_file;

/// Label used for `--text` input in reports.
const TEXT_LABEL: &str = "<text>";

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required_unless_present = "text")]
    pub files: Vec<Utf8PathBuf>,

    /// Check this text instead of reading files.
    #[arg(long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Only run these categories (comma-separated).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Option<Vec<Category>>,

    /// Skip these categories (comma-separated).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub exclude: Option<Vec<Category>>,

    /// Fail when a file has more findings than this.
    #[arg(long)]
    pub max_issues: Option<usize>,
}

/// Pick the categories for one input.
///
/// `--only` beats matching path rules, which beat the config's `checks`.
/// `--exclude` is applied last.
fn select_categories(
    args: &CheckArgs,
    rule_set: &RuleSet,
    config: &Config,
    path: Option<&str>,
) -> Vec<Category> {
    let base = args
        .only
        .clone()
        .or_else(|| path.and_then(|p| rule_set.resolve(p)))
        .unwrap_or_else(|| config.default_checks());
    let excluded = args.exclude.as_deref().unwrap_or_default();
    category::canonical(base.into_iter().filter(|c| !excluded.contains(c)))
}

/// Check files or text and print the findings.
#[instrument(name = "cmd_check", skip_all, fields(files = args.files.len()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(only = ?args.only, exclude = ?args.exclude, "executing check command");

    let registry = PatternRegistry::compile(&config.rule_data())
        .context("failed to compile word lists")?;
    let rule_set = RuleSet::compile(config.rules.as_deref().unwrap_or_default());
    let max_issues = args.max_issues.or(config.max_issues);

    let mut reports: Vec<LintReport> = Vec::new();
    if let Some(ref text) = args.text {
        let categories = select_categories(&args, &rule_set, config, None);
        reports.push(lint::run_lint(TEXT_LABEL, text, &registry, &categories, max_issues));
    } else {
        for file in &args.files {
            let content = read_input_file(file, max_input_bytes)?;
            let categories = select_categories(&args, &rule_set, config, Some(file.as_str()));
            debug!(file = %file, ?categories, "checking file");
            reports.push(lint::run_lint(
                file.as_str(),
                &content,
                &registry,
                &categories,
                max_issues,
            ));
        }
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| !r.pass)
        .map(|r| r.file.as_str())
        .collect();
    if !failed.is_empty() {
        bail!(
            "issue limit of {} exceeded: {}",
            max_issues.unwrap_or_default(),
            failed.join(", ")
        );
    }

    Ok(())
}

fn print_report(report: &LintReport) {
    for cat in &report.categories {
        for finding in &cat.findings {
            println!(
                "{}:{}:{}  {:<9} \"{}\"",
                report.file.bold(),
                finding.line,
                finding.column,
                cat.category.as_str().yellow(),
                finding.text
            );
        }
    }

    let summary = match report.total {
        0 => "no issues".green().to_string(),
        1 => "1 issue".yellow().to_string(),
        n => format!("{n} issues").yellow().to_string(),
    };
    let status = if report.pass {
        String::new()
    } else {
        format!(" {}", "FAIL".red())
    };
    println!("{}: {summary}{status}", report.file.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidyprose_core::config::Rule;

    fn rule_set(paths: &[&str], checks: &[Category]) -> RuleSet {
        RuleSet::compile(&[Rule {
            paths: paths.iter().map(|p| (*p).to_string()).collect(),
            checks: Some(checks.to_vec()),
            exclude: None,
        }])
    }

    #[test]
    fn defaults_to_every_category() {
        let args = CheckArgs::default();
        let selected = select_categories(&args, &RuleSet::compile(&[]), &Config::default(), None);
        assert_eq!(selected, Category::ALL);
    }

    #[test]
    fn only_overrides_rules() {
        let args = CheckArgs {
            only: Some(vec![Category::Cliche]),
            ..Default::default()
        };
        let rules = rule_set(&["*.md"], &[Category::Passive]);
        let selected = select_categories(&args, &rules, &Config::default(), Some("a.md"));
        assert_eq!(selected, [Category::Cliche]);
    }

    #[test]
    fn rules_override_config_checks() {
        let config = Config {
            checks: Some(vec![Category::Adverb]),
            ..Default::default()
        };
        let rules = rule_set(&["*.md"], &[Category::Passive]);
        let args = CheckArgs::default();
        assert_eq!(
            select_categories(&args, &rules, &config, Some("a.md")),
            [Category::Passive]
        );
        assert_eq!(
            select_categories(&args, &rules, &config, Some("a.txt")),
            [Category::Adverb]
        );
    }

    #[test]
    fn exclude_applies_last() {
        let args = CheckArgs {
            exclude: Some(vec![Category::Illusion, Category::Passive]),
            ..Default::default()
        };
        let selected = select_categories(&args, &RuleSet::compile(&[]), &Config::default(), None);
        assert_eq!(
            selected,
            [Category::Weasel, Category::Wordy, Category::Adverb, Category::Cliche]
        );
    }

    #[test]
    fn text_input_succeeds_without_limit() {
        let args = CheckArgs {
            text: Some("the the".to_string()),
            ..Default::default()
        };
        assert!(cmd_check(args, true, &Config::default(), None).is_ok());
    }

    #[test]
    fn text_input_over_limit_fails() {
        let args = CheckArgs {
            text: Some("the the".to_string()),
            max_issues: Some(0),
            ..Default::default()
        };
        assert!(cmd_check(args, false, &Config::default(), None).is_err());
    }
}
