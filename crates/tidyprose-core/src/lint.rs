//! Lint execution engine.
//!
//! Runs a selection of categories against one document and collects the
//! matches into a [`LintReport`] with line and column locations.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::registry::PatternRegistry;
use crate::text::LineIndex;

/// One flagged span in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The matched text.
    pub text: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based character column of `start`.
    pub column: usize,
}

/// Findings for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// The category that produced these findings.
    pub category: Category,
    /// Number of findings.
    pub count: usize,
    /// Findings in order of appearance.
    pub findings: Vec<Finding>,
}

/// Combined results for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// The file (or label) that was linted.
    pub file: String,
    /// One entry per category that ran, in canonical order.
    pub categories: Vec<CategoryReport>,
    /// Total findings across all categories.
    pub total: usize,
    /// Threshold the total was checked against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_issues: Option<usize>,
    /// `false` only when `max_issues` is set and `total` exceeds it.
    pub pass: bool,
}

impl LintReport {
    /// Findings for a category, if it ran.
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Run `categories` against `content`.
///
/// The `file` label is used for reporting only. Never fails: empty content
/// produces an empty, passing report.
#[tracing::instrument(skip(content, registry), fields(text_len = content.len()))]
pub fn run_lint(
    file: &str,
    content: &str,
    registry: &PatternRegistry,
    categories: &[Category],
    max_issues: Option<usize>,
) -> LintReport {
    let index = LineIndex::new(content);

    let reports: Vec<CategoryReport> = registry
        .run_selected(categories, content)
        .into_iter()
        .map(|(category, result)| {
            let findings: Vec<Finding> = result
                .matches
                .into_iter()
                .map(|m| {
                    let location = index.locate(m.start);
                    Finding {
                        text: m.text,
                        start: m.start,
                        end: m.end,
                        line: location.line,
                        column: location.column,
                    }
                })
                .collect();
            CategoryReport {
                category,
                count: findings.len(),
                findings,
            }
        })
        .collect();

    let total = reports.iter().map(|r| r.count).sum();
    let pass = max_issues.is_none_or(|max| total <= max);
    tracing::debug!(total, pass, "lint complete");

    LintReport {
        file: file.to_string(),
        categories: reports,
        total,
        max_issues,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::builtin().unwrap()
    }

    const SAMPLE: &str = "The report was written.\nIt was very very late.";

    #[test]
    fn empty_content_passes() {
        let report = run_lint("empty.txt", "", &registry(), &Category::ALL, Some(0));
        assert!(report.pass);
        assert_eq!(report.total, 0);
        assert_eq!(report.categories.len(), 6);
    }

    #[test]
    fn findings_carry_locations() {
        let report = run_lint("doc.txt", SAMPLE, &registry(), &Category::ALL, None);
        let passive = report.category(Category::Passive).unwrap();
        assert_eq!(passive.count, 1);
        assert_eq!(passive.findings[0].text, "was written");
        assert_eq!((passive.findings[0].line, passive.findings[0].column), (1, 12));

        let illusion = report.category(Category::Illusion).unwrap();
        assert_eq!(illusion.findings[0].text, "very");
        assert_eq!((illusion.findings[0].line, illusion.findings[0].column), (2, 13));
    }

    #[test]
    fn only_selected_categories_run() {
        let report = run_lint("doc.txt", SAMPLE, &registry(), &[Category::Weasel], None);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.total, 2);
        assert!(report.category(Category::Passive).is_none());
    }

    #[test]
    fn threshold_decides_pass() {
        let reg = registry();
        let weasel = [Category::Weasel];
        assert!(run_lint("d", SAMPLE, &reg, &weasel, None).pass);
        assert!(run_lint("d", SAMPLE, &reg, &weasel, Some(2)).pass);
        assert!(!run_lint("d", SAMPLE, &reg, &weasel, Some(1)).pass);
    }

    #[test]
    fn report_serializes() {
        let report = run_lint("doc.txt", SAMPLE, &registry(), &[Category::Illusion], None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["categories"][0]["category"], "illusion");
        assert_eq!(json["categories"][0]["findings"][0]["start"], 36);
        assert!(json.get("max_issues").is_none());
    }
}
