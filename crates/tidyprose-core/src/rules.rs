//! Rule resolution engine.
//!
//! Matches file paths against configured glob rules and decides which
//! categories run on a file. Every matching rule contributes: the result is
//! the union of their `checks` (a rule without `checks` means every
//! category) minus the union of their `exclude` lists.

use globset::{Glob, GlobMatcher};

use crate::category::{self, Category};
use crate::config::Rule;

/// Compiled rule set for efficient matching.
#[derive(Debug, Clone)]
pub struct RuleSet {
    compiled: Vec<CompiledRule>,
}

/// A single rule with pre-compiled glob matchers.
#[derive(Debug, Clone)]
struct CompiledRule {
    matchers: Vec<GlobMatcher>,
    checks: Option<Vec<Category>>,
    exclude: Vec<Category>,
}

impl RuleSet {
    /// Compile a list of rules into a `RuleSet`.
    ///
    /// Invalid glob patterns are skipped with a tracing warning; a rule left
    /// with no valid pattern is dropped.
    pub fn compile(rules: &[Rule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                let matchers: Vec<GlobMatcher> = rule
                    .paths
                    .iter()
                    .filter_map(|pattern| match Glob::new(pattern) {
                        Ok(glob) => Some(glob.compile_matcher()),
                        Err(e) => {
                            tracing::warn!(pattern, error = %e, "skipping invalid glob pattern");
                            None
                        }
                    })
                    .collect();
                if matchers.is_empty() {
                    None
                } else {
                    Some(CompiledRule {
                        matchers,
                        checks: rule.checks.clone(),
                        exclude: rule.exclude.clone().unwrap_or_default(),
                    })
                }
            })
            .collect();
        Self { compiled }
    }

    /// Number of usable rules.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Whether no usable rule was compiled.
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Resolve which categories apply to a file path.
    ///
    /// Returns `None` when no rule matches, so the caller can fall back to
    /// its defaults. The categories come back in canonical order.
    pub fn resolve(&self, file_path: &str) -> Option<Vec<Category>> {
        let matching: Vec<&CompiledRule> = self
            .compiled
            .iter()
            .filter(|rule| rule.matchers.iter().any(|m| m.is_match(file_path)))
            .collect();

        if matching.is_empty() {
            return None;
        }

        let included = matching.iter().flat_map(|rule| {
            rule.checks
                .as_deref()
                .unwrap_or(&Category::ALL)
                .iter()
                .copied()
        });
        let excluded: Vec<Category> = matching
            .iter()
            .flat_map(|rule| rule.exclude.iter().copied())
            .collect();

        let resolved = category::canonical(included.filter(|c| !excluded.contains(c)));
        tracing::debug!(file_path, rules = matching.len(), ?resolved, "resolved rules");
        Some(resolved)
    }
}
