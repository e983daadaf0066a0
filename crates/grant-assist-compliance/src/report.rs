//! Summaries derived from a validation result for dashboards and reports.

use chrono::{DateTime, Utc};
use grant_assist_core::{ComplianceIssue, IssueCategory, ValidationResult};
use serde::{Deserialize, Serialize};

/// Failed and warning counts for one check family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: IssueCategory,
    pub failed: usize,
    pub warnings: usize,
}

/// Dashboard view of a validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub manual_review: usize,
    /// Passed checks as a percentage of all decided checks.
    pub pass_rate: f64,
    /// Failed categories first, then warning-only ones, each in first
    /// appearance order.
    pub categories: Vec<CategoryBreakdown>,
    pub ready_for_submission: bool,
    pub last_run: Option<DateTime<Utc>>,
}

/// Compact result posted into the conversation after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReportCard {
    pub passed: usize,
    pub failed: Vec<ComplianceIssue>,
    pub warnings: Vec<ComplianceIssue>,
}

pub fn summarize(result: &ValidationResult) -> ComplianceSummary {
    let decided = result.passed.len() + result.failed.len() + result.warnings.len();
    let pass_rate = if decided == 0 {
        0.0
    } else {
        result.passed.len() as f64 / decided as f64 * 100.0
    };

    let mut categories: Vec<CategoryBreakdown> = Vec::new();
    let tallies = result
        .failed
        .iter()
        .map(|issue| (issue.category, true))
        .chain(result.warnings.iter().map(|issue| (issue.category, false)));
    for (category, failed) in tallies {
        let index = match categories.iter().position(|c| c.category == category) {
            Some(index) => index,
            None => {
                categories.push(CategoryBreakdown {
                    category,
                    failed: 0,
                    warnings: 0,
                });
                categories.len() - 1
            }
        };
        if failed {
            categories[index].failed += 1;
        } else {
            categories[index].warnings += 1;
        }
    }

    ComplianceSummary {
        passed: result.passed.len(),
        failed: result.failed.len(),
        warnings: result.warnings.len(),
        manual_review: result.manual_review.len(),
        pass_rate,
        categories,
        ready_for_submission: result.ready_for_submission,
        last_run: result.last_run,
    }
}

pub fn report_card(result: &ValidationResult) -> ComplianceReportCard {
    ComplianceReportCard {
        passed: result.passed.len(),
        failed: result.failed.clone(),
        warnings: result.warnings.clone(),
    }
}

/// Banner text nudging the researcher toward the next compliance step.
pub fn next_action_text(result: &ValidationResult) -> String {
    match result.failed.len() {
        0 => "Run compliance validation on your proposal".to_string(),
        n => format!("Fix {n} compliance issues before final assembly"),
    }
}

/// One line per leading blocker: `ID: fix`, falling back to the description.
pub fn top_blockers(result: &ValidationResult, limit: usize) -> Vec<String> {
    result
        .failed
        .iter()
        .take(limit)
        .map(|issue| {
            format!(
                "{}: {}",
                issue.id,
                issue.fix.as_deref().unwrap_or(&issue.description)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grant_assist_core::Severity;

    fn issue(id: &str, category: IssueCategory, severity: Severity) -> ComplianceIssue {
        ComplianceIssue {
            id: id.to_string(),
            category,
            name: id.to_string(),
            description: format!("{id} description"),
            severity,
            fix: None,
        }
    }

    #[test]
    fn test_never_run_summary() {
        let summary = summarize(&ValidationResult::default());
        assert_eq!(summary.pass_rate, 0.0);
        assert!(summary.categories.is_empty());
        assert!(summary.last_run.is_none());
    }

    #[test]
    fn test_pass_rate_ignores_manual_review() {
        let result = ValidationResult {
            passed: vec!["a".into(), "b".into(), "c".into()],
            failed: vec![issue("CITE-01", IssueCategory::Citations, Severity::Failed)],
            manual_review: vec!["check fonts".into()],
            ..ValidationResult::default()
        };
        let summary = summarize(&result);
        assert_eq!(summary.pass_rate, 75.0);
        assert_eq!(summary.manual_review, 1);
    }

    #[test]
    fn test_categories_failed_first() {
        let result = ValidationResult {
            failed: vec![
                issue("STRUCT-01", IssueCategory::Structure, Severity::Failed),
                issue("BUDGET-01", IssueCategory::Budget, Severity::Failed),
                issue("STRUCT-02", IssueCategory::Structure, Severity::Failed),
            ],
            warnings: vec![
                issue("AIMS-01", IssueCategory::ScientificPlan, Severity::Warning),
                issue("X-01", IssueCategory::Budget, Severity::Warning),
            ],
            ..ValidationResult::default()
        };
        let summary = summarize(&result);

        assert_eq!(
            summary.categories,
            vec![
                CategoryBreakdown {
                    category: IssueCategory::Structure,
                    failed: 2,
                    warnings: 0
                },
                CategoryBreakdown {
                    category: IssueCategory::Budget,
                    failed: 1,
                    warnings: 1
                },
                CategoryBreakdown {
                    category: IssueCategory::ScientificPlan,
                    failed: 0,
                    warnings: 1
                },
            ]
        );
    }

    #[test]
    fn test_next_action_text() {
        assert_eq!(
            next_action_text(&ValidationResult::default()),
            "Run compliance validation on your proposal"
        );

        let result = ValidationResult {
            failed: vec![
                issue("STRUCT-01", IssueCategory::Structure, Severity::Failed),
                issue("CITE-01", IssueCategory::Citations, Severity::Failed),
            ],
            ..ValidationResult::default()
        };
        assert_eq!(
            next_action_text(&result),
            "Fix 2 compliance issues before final assembly"
        );
    }

    #[test]
    fn test_top_blockers_prefers_fix() {
        let mut with_fix = issue("CITE-01", IssueCategory::Citations, Severity::Failed);
        with_fix.fix = Some("Add citations.".to_string());
        let result = ValidationResult {
            failed: vec![
                with_fix,
                issue("STRUCT-01", IssueCategory::Structure, Severity::Failed),
                issue("BUDGET-01", IssueCategory::Budget, Severity::Failed),
                issue("BUDGET-02", IssueCategory::Budget, Severity::Failed),
            ],
            ..ValidationResult::default()
        };

        assert_eq!(
            top_blockers(&result, 3),
            vec![
                "CITE-01: Add citations.".to_string(),
                "STRUCT-01: STRUCT-01 description".to_string(),
                "BUDGET-01: BUDGET-01 description".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_card_counts_passes() {
        let result = ValidationResult {
            passed: vec!["ok".into()],
            warnings: vec![issue("EVID-01", IssueCategory::Evidence, Severity::Warning)],
            ..ValidationResult::default()
        };
        let card = report_card(&result);
        assert_eq!(card.passed, 1);
        assert!(card.failed.is_empty());
        assert_eq!(card.warnings.len(), 1);
    }
}
