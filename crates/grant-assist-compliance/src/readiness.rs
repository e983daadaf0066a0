//! Submission readiness checklist and weighted score.
//!
//! Readiness is separate from compliance: it tracks how far the proposal has
//! progressed (profile, sources, drafts, approvals, validation) rather than
//! whether it satisfies funder rules.

use chrono::Local;
use grant_assist_core::{
    ProposalSections, ProposalSnapshot, ReferenceSource, ResearcherInfo, SectionName,
    ValidationResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status of a single checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Ready,
    InProgress,
    Blocked,
}

impl ReadinessStatus {
    /// Contribution to the score: 1 for ready, 0.5 in progress, 0 blocked.
    pub fn weight(&self) -> f64 {
        match self {
            ReadinessStatus::Ready => 1.0,
            ReadinessStatus::InProgress => 0.5,
            ReadinessStatus::Blocked => 0.0,
        }
    }

    /// Three-way status from a completed count out of a total.
    fn from_progress(done: usize, total: usize) -> Self {
        if done == total {
            ReadinessStatus::Ready
        } else if done > 0 {
            ReadinessStatus::InProgress
        } else {
            ReadinessStatus::Blocked
        }
    }

    fn ready_or(ready: bool, otherwise: ReadinessStatus) -> Self {
        if ready {
            ReadinessStatus::Ready
        } else {
            otherwise
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessItem {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub status: ReadinessStatus,
    /// UI command that moves the item forward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ReadinessItem {
    fn new(
        id: &str,
        title: &str,
        detail: impl Into<String>,
        status: ReadinessStatus,
        action: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            detail: detail.into(),
            status,
            action: Some(action.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSnapshot {
    /// Weighted completion, 0 to 100.
    pub score: u8,
    pub blockers: usize,
    pub in_progress: usize,
    /// No item is blocked. In-progress items do not prevent readiness.
    pub ready: bool,
    pub items: Vec<ReadinessItem>,
}

impl ReadinessSnapshot {
    /// Score an arbitrary checklist.
    pub fn from_items(items: Vec<ReadinessItem>) -> Self {
        let blockers = count(&items, ReadinessStatus::Blocked);
        let in_progress = count(&items, ReadinessStatus::InProgress);
        let score = if items.is_empty() {
            0
        } else {
            let sum: f64 = items.iter().map(|item| item.status.weight()).sum();
            (sum / items.len() as f64 * 100.0).round() as u8
        };

        Self {
            score,
            blockers,
            in_progress,
            ready: blockers == 0,
            items,
        }
    }

    pub fn item(&self, id: &str) -> Option<&ReadinessItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

fn count(items: &[ReadinessItem], status: ReadinessStatus) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

/// The slice of proposal state the readiness scorer reads.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessInput<'a> {
    pub researcher_info: &'a ResearcherInfo,
    pub sections: &'a ProposalSections,
    pub validation: &'a ValidationResult,
    pub reference_sources: &'a [ReferenceSource],
}

impl<'a> ReadinessInput<'a> {
    pub fn from_snapshot(snapshot: &'a ProposalSnapshot) -> Self {
        Self {
            researcher_info: &snapshot.researcher_info,
            sections: &snapshot.proposal_sections,
            validation: &snapshot.validation,
            reference_sources: &snapshot.reference_sources,
        }
    }

    /// Build the six-item checklist and score it.
    pub fn snapshot(&self) -> ReadinessSnapshot {
        let total = SectionName::COUNT;
        let drafted = self.sections.drafted_count();
        let approved = self.sections.approved_count();
        let has_profile = self.researcher_info.has_profile();
        let sources = self.reference_sources.len();

        let items = vec![
            ReadinessItem::new(
                "profile",
                "Researcher profile context",
                if has_profile {
                    "Name and affiliation are set for personalized drafting."
                } else {
                    "Add name and affiliation in onboarding context."
                },
                ReadinessStatus::ready_or(has_profile, ReadinessStatus::InProgress),
                "replay-onboarding",
            ),
            ReadinessItem::new(
                "sources",
                "Source-grounded references",
                if sources > 0 {
                    format!("{sources} source file(s) attached for grounded citations.")
                } else {
                    "Attach at least one paper, prior proposal, or reviewer note.".to_string()
                },
                ReadinessStatus::ready_or(sources > 0, ReadinessStatus::Blocked),
                "/sources",
            ),
            ReadinessItem::new(
                "draft",
                "Draft coverage",
                format!("{drafted}/{total} core sections drafted."),
                ReadinessStatus::from_progress(drafted, total),
                "/preview",
            ),
            ReadinessItem::new(
                "approvals",
                "Section approvals",
                format!("{approved}/{total} sections approved."),
                ReadinessStatus::from_progress(approved, total),
                "/approve",
            ),
            self.compliance_run_item(),
            ReadinessItem::new(
                "submission-gate",
                "Submission gate",
                if self.validation.ready_for_submission {
                    "No hard blockers detected. Ready for final assembly."
                } else {
                    "Resolve compliance blockers before submission."
                },
                ReadinessStatus::ready_or(
                    self.validation.ready_for_submission,
                    ReadinessStatus::Blocked,
                ),
                "open-compliance",
            ),
        ];

        let snapshot = ReadinessSnapshot::from_items(items);
        debug!(
            score = snapshot.score,
            blockers = snapshot.blockers,
            in_progress = snapshot.in_progress,
            "readiness_scored"
        );
        snapshot
    }

    fn compliance_run_item(&self) -> ReadinessItem {
        let (detail, status) = match self.validation.last_run {
            Some(last_run) => (
                format!(
                    "Last run at {}. {} blocker(s), {} warning(s).",
                    last_run.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                    self.validation.failed.len(),
                    self.validation.warnings.len()
                ),
                ReadinessStatus::Ready,
            ),
            None => (
                "Run validation to get blocker list.".to_string(),
                ReadinessStatus::Blocked,
            ),
        };

        ReadinessItem::new(
            "compliance-run",
            "Compliance check run",
            detail,
            status,
            "/validate",
        )
    }
}

/// Score readiness from explicit state slices.
pub fn build_readiness_snapshot(
    researcher_info: &ResearcherInfo,
    sections: &ProposalSections,
    validation: &ValidationResult,
    reference_sources: &[ReferenceSource],
) -> ReadinessSnapshot {
    ReadinessInput {
        researcher_info,
        sections,
        validation,
        reference_sources,
    }
    .snapshot()
}
