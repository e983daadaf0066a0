//! Report command implementation.
//!
//! Renders a markdown compliance and readiness report for a proposal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;
use chrono::Utc;
use grant_assist_compliance::{
    next_action_text, summarize, ComplianceInput, ComplianceIssue, ComplianceValidator,
    ReadinessInput,
};
use grant_assist_core::{ProposalSnapshot, ValidationResult};
use tracing::info;

use super::{emit, load_snapshot, readiness::status_icon};
use crate::config::Config;

/// Validate the snapshot and write the report. Without `output` the report
/// goes to `<output_dir>/<state-name>-compliance.md`.
pub fn execute(config: &Config, path: &Path, output: Option<PathBuf>) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let result = ComplianceValidator::new().validate(ComplianceInput::from_snapshot(&snapshot));

    let output_path = output.unwrap_or_else(|| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "proposal".to_string());
        config.output_dir.join(format!("{stem}-compliance.md"))
    });

    let content = render_markdown(&snapshot, &result)?;
    info!(output = %output_path.display(), "Rendering compliance report");
    emit(&content, Some(&output_path))
}

/// Render the report for a snapshot and a fresh validation result.
///
/// Readiness is scored against `result` rather than the stored validation.
pub fn render_markdown(snapshot: &ProposalSnapshot, result: &ValidationResult) -> Result<String> {
    let readiness = ReadinessInput {
        validation: result,
        ..ReadinessInput::from_snapshot(snapshot)
    }
    .snapshot();
    let summary = summarize(result);

    let template = ReportTemplate {
        title: snapshot
            .project_info
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Untitled proposal".to_string()),
        generated_at: result
            .last_run
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        ready: result.ready_for_submission,
        next_action: next_action_text(result),
        passed: result.passed.clone(),
        failed: result.failed.iter().map(IssueRow::from).collect(),
        warnings: result.warnings.iter().map(IssueRow::from).collect(),
        manual_review: result.manual_review.clone(),
        pass_rate: format!("{:.0}", summary.pass_rate),
        categories: summary
            .categories
            .iter()
            .map(|c| CategoryRow {
                label: c.category.to_string(),
                failed: c.failed,
                warnings: c.warnings,
            })
            .collect(),
        score: readiness.score,
        blockers: readiness.blockers,
        checklist: readiness
            .items
            .iter()
            .map(|item| ChecklistRow {
                icon: status_icon(item.status),
                title: item.title.clone(),
                detail: item.detail.clone(),
            })
            .collect(),
    };

    template
        .render()
        .with_context(|| "Failed to render markdown template")
}

struct IssueRow {
    id: String,
    name: String,
    category: String,
    description: String,
    fix: String,
}

impl From<&ComplianceIssue> for IssueRow {
    fn from(issue: &ComplianceIssue) -> Self {
        Self {
            id: issue.id.clone(),
            name: issue.name.clone(),
            category: issue.category.to_string(),
            description: issue.description.clone(),
            fix: issue.fix.clone().unwrap_or_default(),
        }
    }
}

struct CategoryRow {
    label: String,
    failed: usize,
    warnings: usize,
}

struct ChecklistRow {
    icon: &'static str,
    title: String,
    detail: String,
}

/// Askama template for markdown output.
#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct ReportTemplate {
    title: String,
    generated_at: String,
    ready: bool,
    next_action: String,
    passed: Vec<String>,
    failed: Vec<IssueRow>,
    warnings: Vec<IssueRow>,
    manual_review: Vec<String>,
    pass_rate: String,
    categories: Vec<CategoryRow>,
    score: u8,
    blockers: usize,
    checklist: Vec<ChecklistRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use grant_assist_core::fixtures::SnapshotBuilder;

    fn render(snapshot: &ProposalSnapshot) -> String {
        let result =
            ComplianceValidator::new().validate(ComplianceInput::from_snapshot(snapshot));
        render_markdown(snapshot, &result).unwrap()
    }

    #[test]
    fn test_report_for_empty_state() {
        let markdown = render(&SnapshotBuilder::new().build());

        assert!(markdown.starts_with("# Compliance Report: Untitled proposal"));
        assert!(markdown.contains("**Ready for submission:** no"));
        assert!(markdown.contains("### STRUCT-01: Missing Draft Sections"));
        assert!(markdown.contains("| Structure | 1 | 0 |"));
        assert!(markdown.contains("Fix 2 compliance issues before final assembly"));
    }

    #[test]
    fn test_report_for_ready_proposal() {
        let mut snapshot = SnapshotBuilder::submission_ready();
        snapshot.project_info.title = Some("Sleep and memory".to_string());
        let markdown = render(&snapshot);

        assert!(markdown.starts_with("# Compliance Report: Sleep and memory"));
        assert!(markdown.contains("**Ready for submission:** yes"));
        assert!(markdown.contains("No blocking issues."));
        assert!(markdown.contains("Readiness score: 100%"));
    }
}
