//! Validate command implementation.
//!
//! Runs compliance validation over a stored proposal snapshot.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use grant_assist_compliance::{
    next_action_text, top_blockers, ComplianceInput, ComplianceIssue, ComplianceValidator,
};
use grant_assist_core::ValidationResult;
use tracing::info;

use super::{emit, load_snapshot, report, OutputFormat};

/// Number of blockers highlighted after a run.
const TOP_BLOCKERS: usize = 3;

pub fn execute(path: &Path, format: OutputFormat, output: Option<&Path>, strict: bool) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let result = ComplianceValidator::new().validate(ComplianceInput::from_snapshot(&snapshot));

    info!(
        path = %path.display(),
        failed = result.failed.len(),
        ready = result.ready_for_submission,
        "Validated proposal"
    );

    let content = match format {
        OutputFormat::Text => render_text(&result)?,
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Markdown => report::render_markdown(&snapshot, &result)?,
    };
    emit(&content, output)?;

    if strict && !result.ready_for_submission {
        anyhow::bail!(
            "Proposal is not ready for submission ({} blocker(s))",
            result.failed.len()
        );
    }
    Ok(())
}

/// Human-readable validation summary.
pub fn render_text(result: &ValidationResult) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "📋 Compliance Validation")?;
    writeln!(out, "{:─<50}", "")?;
    writeln!(out, "✅ Passed:         {}", result.passed.len())?;
    writeln!(out, "❌ Failed:         {}", result.failed.len())?;
    writeln!(out, "⚠️  Warnings:       {}", result.warnings.len())?;
    writeln!(out, "🔍 Manual review:  {}", result.manual_review.len())?;

    write_issues(&mut out, "❌ Blockers", &result.failed)?;
    write_issues(&mut out, "⚠️  Warnings", &result.warnings)?;

    if !result.manual_review.is_empty() {
        writeln!(out)?;
        writeln!(out, "🔍 Manual review")?;
        for note in &result.manual_review {
            writeln!(out, "   • {note}")?;
        }
    }

    writeln!(out)?;
    let blockers = top_blockers(result, TOP_BLOCKERS);
    if !blockers.is_empty() {
        writeln!(out, "Top blockers to fix next:")?;
        for line in blockers {
            writeln!(out, "   {line}")?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Ready for submission: {}",
        if result.ready_for_submission { "yes" } else { "no" }
    )?;
    write!(out, "Next: {}", next_action_text(result))?;

    Ok(out)
}

fn write_issues(out: &mut String, heading: &str, issues: &[ComplianceIssue]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{heading}")?;
    for issue in issues {
        writeln!(out, "   {} {} [{}]", issue.id, issue.name, issue.category)?;
        writeln!(out, "      {}", issue.description)?;
        if let Some(fix) = &issue.fix {
            writeln!(out, "      Fix: {fix}")?;
        }
    }
    Ok(())
}
