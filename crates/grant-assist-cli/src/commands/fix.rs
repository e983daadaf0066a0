//! Fix command implementation.
//!
//! Looks up a single issue by code and prints how to resolve it.

use std::path::Path;

use anyhow::Result;
use grant_assist_compliance::{ComplianceInput, ComplianceValidator, RuleId};

use super::load_snapshot;

pub fn execute(path: &Path, issue_id: &str) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let validator = ComplianceValidator::new();
    let result = validator.validate(ComplianceInput::from_snapshot(&snapshot));

    let Some(issue) = result.find_issue(issue_id) else {
        let known = validator
            .registry()
            .rule_ids()
            .iter()
            .any(|id| id.name().eq_ignore_ascii_case(issue_id));
        if known {
            println!("✅ {} is not raised for this proposal", RuleId::new(issue_id.to_uppercase()));
            return Ok(());
        }
        anyhow::bail!("Unknown issue: {}. Run `ga rules` to list issue codes", issue_id);
    };

    println!("🔧 {}: {} [{}]", issue.id, issue.name, issue.category);
    println!("   Severity: {}", issue.severity);
    println!("   Problem:  {}", issue.description);
    if let Some(fix) = &issue.fix {
        println!("   Fix:      {}", fix);
    }
    Ok(())
}
