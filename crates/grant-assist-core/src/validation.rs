//! Compliance issues and validation results.
//!
//! These are produced by the compliance engine and stored back into proposal
//! state by the calling application, so they live alongside the rest of the
//! snapshot model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an issue affects submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks submission.
    Failed,
    /// Surfaced to the researcher but does not block submission.
    Warning,
}

impl Severity {
    pub fn blocks_submission(&self) -> bool {
        matches!(self, Severity::Failed)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Failed => f.write_str("failed"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Which family of checks raised an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    Structure,
    Length,
    Citations,
    Budget,
    #[serde(rename = "Scientific Plan")]
    ScientificPlan,
    Evidence,
    Formatting,
}

impl IssueCategory {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Structure => "Structure",
            IssueCategory::Length => "Length",
            IssueCategory::Citations => "Citations",
            IssueCategory::Budget => "Budget",
            IssueCategory::ScientificPlan => "Scientific Plan",
            IssueCategory::Evidence => "Evidence",
            IssueCategory::Formatting => "Formatting",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rule violation or warning.
///
/// `id` is a stable `CATEGORY-NN` code; the UI uses it to deep-link a
/// "fix this issue" action, so codes never change between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    pub id: String,
    pub category: IssueCategory,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

/// Outcome of one validation run.
///
/// The default value is the never-run state held by a fresh proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationResult {
    pub last_run: Option<DateTime<Utc>>,
    /// Human-readable notes for checks that passed.
    pub passed: Vec<String>,
    pub failed: Vec<ComplianceIssue>,
    pub warnings: Vec<ComplianceIssue>,
    /// Checks that could not run because configuration is missing.
    pub manual_review: Vec<String>,
    pub ready_for_submission: bool,
}

impl ValidationResult {
    /// Whether validation has ever been run for this proposal.
    pub fn has_run(&self) -> bool {
        self.last_run.is_some()
    }

    /// Find a failed or warning issue by its stable code.
    pub fn find_issue(&self, id: &str) -> Option<&ComplianceIssue> {
        self.issues().find(|issue| issue.id.eq_ignore_ascii_case(id))
    }

    /// Failed issues followed by warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.failed.iter().chain(self.warnings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: &str, severity: Severity) -> ComplianceIssue {
        ComplianceIssue {
            id: id.to_string(),
            category: IssueCategory::Budget,
            name: "Test".to_string(),
            description: "Test issue".to_string(),
            severity,
            fix: None,
        }
    }

    #[test]
    fn test_default_is_never_run() {
        let result = ValidationResult::default();
        assert!(!result.has_run());
        assert!(!result.ready_for_submission);
        assert!(result.failed.is_empty());
    }

    #[test]
    fn test_find_issue_searches_failed_and_warnings() {
        let result = ValidationResult {
            failed: vec![issue("BUDGET-01", Severity::Failed)],
            warnings: vec![issue("EVID-01", Severity::Warning)],
            ..ValidationResult::default()
        };

        assert_eq!(result.find_issue("BUDGET-01").unwrap().severity, Severity::Failed);
        assert_eq!(result.find_issue("evid-01").unwrap().severity, Severity::Warning);
        assert!(result.find_issue("CITE-01").is_none());
    }

    #[test]
    fn test_issue_wire_format() {
        let mut value = issue("AIMS-01", Severity::Warning);
        value.category = IssueCategory::ScientificPlan;
        let json = serde_json::to_value(&value).unwrap();

        assert_eq!(json["category"], "Scientific Plan");
        assert_eq!(json["severity"], "warning");
        assert!(json.get("fix").is_none());
    }

    #[test]
    fn test_reads_iso_timestamp_from_store() {
        let result: ValidationResult = serde_json::from_str(
            r#"{"lastRun": "2025-03-01T10:15:00.000Z", "readyForSubmission": true}"#,
        )
        .unwrap();
        assert!(result.has_run());
        assert!(result.ready_for_submission);
        assert!(result.manual_review.is_empty());
    }
}
