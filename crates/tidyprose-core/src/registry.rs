//! Compiled pattern registry.
//!
//! One [`CompiledPattern`] per category, built once and handed to whoever
//! needs it. There is no process-global table: construct a registry at
//! startup and pass it by reference.

use crate::category::Category;
use crate::error::PatternResult;
use crate::matcher::MatchResult;
use crate::pattern::{self, CompiledPattern};
use crate::word_lists::RuleData;

/// Category → compiled pattern map covering every category.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    // Indexed by position in `Category::ALL`.
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Compile every category from `data`.
    ///
    /// Fails on the first category whose rule data cannot be compiled.
    #[tracing::instrument(skip_all)]
    pub fn compile(data: &RuleData) -> PatternResult<Self> {
        let patterns = Category::ALL
            .into_iter()
            .map(|category| pattern::compile(category, data))
            .collect::<PatternResult<Vec<_>>>()?;
        tracing::debug!(categories = patterns.len(), "pattern registry ready");
        Ok(Self { patterns })
    }

    /// Compile the built-in rule data.
    pub fn builtin() -> PatternResult<Self> {
        Self::compile(&RuleData::builtin())
    }

    /// The compiled pattern for a category.
    pub fn get(&self, category: Category) -> &CompiledPattern {
        // Variants are declared in `Category::ALL` order.
        &self.patterns[category as usize]
    }

    /// Patterns in canonical category order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }

    /// Run one category against `text`.
    pub fn run(&self, category: Category, text: &str) -> MatchResult {
        self.get(category).run(text)
    }

    /// Run every category against the same text.
    pub fn run_all(&self, text: &str) -> Vec<(Category, MatchResult)> {
        self.iter().map(|p| (p.category(), p.run(text))).collect()
    }

    /// Run the given categories, in canonical order, against `text`.
    pub fn run_selected(&self, categories: &[Category], text: &str) -> Vec<(Category, MatchResult)> {
        crate::category::canonical(categories.iter().copied())
            .into_iter()
            .map(|c| (c, self.run(c, text)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
