//! Demo command implementation.
//!
//! Writes a sample proposal snapshot that exercises most checks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use grant_assist_core::fixtures::SnapshotBuilder;
use grant_assist_core::{Aim, ProposalSnapshot, SectionName};

use super::emit;
use crate::config::Config;

pub fn execute(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let output_path = output.unwrap_or_else(|| config.output_dir.join("demo-proposal.json"));
    let content = demo_snapshot()
        .to_json_pretty()
        .with_context(|| "Failed to serialize demo snapshot")?;

    emit(&content, Some(&output_path))?;
    println!("Try: ga validate {}", output_path.display());
    Ok(())
}

/// A mid-drafting proposal: a long abstract, an over-budget second year and
/// one incomplete aim.
pub fn demo_snapshot() -> ProposalSnapshot {
    let abstract_text = "Memory consolidation depends on sleep, yet the circadian timing of \
                         replay remains unmapped. "
        .repeat(25);

    let mut snapshot = SnapshotBuilder::new()
        .researcher("Dr. Noa Cohen", "Life Sciences")
        .required_sections(&["Abstract", "Methods", "Budget"])
        .page_limits(Some(5.0), Some(10.0))
        .budget_limits(Some(250_000.0), Some(1_000_000.0))
        .budget_totals(
            [
                Some(240_000.0),
                Some(285_000.0),
                Some(230_000.0),
                Some(210_000.0),
            ],
            Some(965_000.0),
        )
        .formatting("Arial 11", "", "PDF")
        .draft(SectionName::Abstract, &abstract_text)
        .draft(
            SectionName::Background,
            "Sleep-dependent replay stabilizes hippocampal memories.",
        )
        .draft(
            SectionName::Methods,
            "Two-photon imaging in head-fixed mice across the light cycle.",
        )
        .page_count(SectionName::Background, 6.0)
        .page_count(SectionName::Methods, 8.5)
        .approve(SectionName::Background)
        .bibliography(&["Buzsaki G. (2015) Hippocampus 25:1073-1188"])
        .source("src-1", "Pilot data (N=45)", "pilot-study.pdf")
        .build();

    snapshot.project_info.title = Some("Circadian control of memory consolidation".to_string());
    snapshot.project_info.aims = vec![
        Aim {
            number: 1,
            title: Some("Map circadian replay".to_string()),
            hypothesis: Some("Clock neurons gate replay onset".to_string()),
            approach: None,
        },
        Aim {
            number: 2,
            title: Some("Perturb replay timing".to_string()),
            hypothesis: None,
            approach: None,
        },
    ];
    snapshot
}
