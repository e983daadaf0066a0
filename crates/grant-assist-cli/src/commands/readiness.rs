//! Readiness command implementation.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use grant_assist_compliance::{
    ComplianceInput, ComplianceValidator, ReadinessInput, ReadinessSnapshot, ReadinessStatus,
};

use super::{emit, load_snapshot, OutputFormat};

/// Score readiness from the stored validation, or a fresh run when
/// `revalidate` is set.
pub fn execute(path: &Path, format: OutputFormat, revalidate: bool) -> Result<()> {
    let mut snapshot = load_snapshot(path)?;
    if revalidate {
        snapshot.validation =
            ComplianceValidator::new().validate(ComplianceInput::from_snapshot(&snapshot));
    }

    let readiness = ReadinessInput::from_snapshot(&snapshot).snapshot();
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&readiness)?,
        OutputFormat::Text => render_text(&readiness)?,
        OutputFormat::Markdown => render_markdown(&readiness)?,
    };
    emit(&content, None)
}

pub fn status_icon(status: ReadinessStatus) -> &'static str {
    match status {
        ReadinessStatus::Ready => "✅",
        ReadinessStatus::InProgress => "🟡",
        ReadinessStatus::Blocked => "⛔",
    }
}

pub fn render_text(readiness: &ReadinessSnapshot) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "🎯 Submission Readiness: {}%", readiness.score)?;
    writeln!(out, "{:─<50}", "")?;
    for item in &readiness.items {
        writeln!(out, "{} {}", status_icon(item.status), item.title)?;
        writeln!(out, "   {}", item.detail)?;
    }
    writeln!(out)?;
    write!(
        out,
        "Blockers: {}  In progress: {}  Ready: {}",
        readiness.blockers,
        readiness.in_progress,
        if readiness.ready { "yes" } else { "no" }
    )?;

    Ok(out)
}

/// Checklist as a markdown table, one row per readiness item.
pub fn render_markdown(readiness: &ReadinessSnapshot) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "# Submission Readiness: {}%", readiness.score)?;
    writeln!(out)?;
    writeln!(out, "| Status | Item | Detail |")?;
    writeln!(out, "|---|---|---|")?;
    for item in &readiness.items {
        writeln!(
            out,
            "| {} | {} | {} |",
            status_icon(item.status),
            item.title,
            item.detail.replace('|', "\\|")
        )?;
    }
    writeln!(out)?;
    write!(
        out,
        "**Blockers:** {}  **In progress:** {}  **Ready:** {}",
        readiness.blockers,
        readiness.in_progress,
        if readiness.ready { "yes" } else { "no" }
    )?;

    Ok(out)
}
