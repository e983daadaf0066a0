//! The compliance validator: runs the registry over a snapshot and assembles
//! the result.

use chrono::{DateTime, Utc};
use grant_assist_core::{
    ProjectInfo, ProposalSections, ProposalSnapshot, ReferenceSource, Requirements, Resources,
    ValidationResult,
};
use tracing::{debug, info};

use crate::rule::{apply, RuleContext, RuleOutcome, RuleRegistry};

/// The slice of proposal state the validator reads.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceInput<'a> {
    pub requirements: &'a Requirements,
    pub sections: &'a ProposalSections,
    pub resources: &'a Resources,
    pub project_info: &'a ProjectInfo,
    pub reference_sources: &'a [ReferenceSource],
}

impl<'a> ComplianceInput<'a> {
    pub fn from_snapshot(snapshot: &'a ProposalSnapshot) -> Self {
        Self {
            requirements: &snapshot.requirements,
            sections: &snapshot.proposal_sections,
            resources: &snapshot.resources,
            project_info: &snapshot.project_info,
            reference_sources: &snapshot.reference_sources,
        }
    }
}

/// Runs an ordered rule registry and files each outcome into the result.
#[derive(Debug, Clone)]
pub struct ComplianceValidator {
    registry: RuleRegistry,
}

impl Default for ComplianceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplianceValidator {
    /// Validator with the standard rules.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::standard())
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate, stamping `lastRun` with the current time.
    pub fn validate(&self, input: ComplianceInput<'_>) -> ValidationResult {
        self.validate_at(input, Utc::now())
    }

    /// Validate with an explicit run timestamp. Output is fully determined by
    /// `input` and `now`.
    pub fn validate_at(&self, input: ComplianceInput<'_>, now: DateTime<Utc>) -> ValidationResult {
        let ctx = RuleContext::new(input);
        let mut result = ValidationResult {
            last_run: Some(now),
            ..ValidationResult::default()
        };

        for rule in self.registry.iter() {
            let outcome = apply(rule.as_ref(), &ctx);
            debug!(rule = %rule.id(), outcome = outcome_kind(&outcome), "compliance_rule_evaluated");

            match outcome {
                RuleOutcome::Passed(note) => result.passed.push(note),
                RuleOutcome::Issue(issue) if issue.severity.blocks_submission() => {
                    result.failed.push(issue)
                }
                RuleOutcome::Issue(issue) => result.warnings.push(issue),
                RuleOutcome::ManualReview(note) => result.manual_review.push(note),
                RuleOutcome::Skip => {}
            }
        }

        // Section completeness is re-checked here so the gate holds even if
        // STRUCT-01 is removed from the registry.
        result.ready_for_submission = result.failed.is_empty() && ctx.missing().is_empty();

        info!(
            passed = result.passed.len(),
            failed = result.failed.len(),
            warnings = result.warnings.len(),
            manual_review = result.manual_review.len(),
            ready = result.ready_for_submission,
            "compliance_validation_complete"
        );

        result
    }
}

fn outcome_kind(outcome: &RuleOutcome) -> &'static str {
    match outcome {
        RuleOutcome::Passed(_) => "passed",
        RuleOutcome::Issue(_) => "issue",
        RuleOutcome::ManualReview(_) => "manual_review",
        RuleOutcome::Skip => "skip",
    }
}

/// Run the standard checks over explicit state slices.
pub fn validate(
    requirements: &Requirements,
    sections: &ProposalSections,
    resources: &Resources,
    project_info: &ProjectInfo,
    reference_sources: &[ReferenceSource],
) -> ValidationResult {
    ComplianceValidator::new().validate(ComplianceInput {
        requirements,
        sections,
        resources,
        project_info,
        reference_sources,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use grant_assist_core::fixtures::SnapshotBuilder;
    use grant_assist_core::SectionName;

    use super::*;
    use crate::rules::MissingDraftSections;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_state() {
        let snapshot = SnapshotBuilder::new().build();
        let result = ComplianceValidator::new()
            .validate_at(ComplianceInput::from_snapshot(&snapshot), fixed_time());

        let failed: Vec<&str> = result.failed.iter().map(|i| i.id.as_str()).collect();
        let warnings: Vec<&str> = result.warnings.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(failed, vec!["STRUCT-01", "CITE-01"]);
        assert_eq!(warnings, vec!["AIMS-01", "EVID-01"]);
        assert_eq!(
            result.manual_review,
            vec![
                "Annual budget maximum is not configured.".to_string(),
                "Formatting requirements are partially missing. Verify font, margins, and file format manually."
                    .to_string(),
            ]
        );
        assert!(!result.ready_for_submission);
        assert_eq!(result.last_run, Some(fixed_time()));
    }

    #[test]
    fn test_submission_ready_snapshot() {
        let snapshot = SnapshotBuilder::submission_ready();
        let result = ComplianceValidator::new()
            .validate_at(ComplianceInput::from_snapshot(&snapshot), fixed_time());

        assert!(result.failed.is_empty(), "{:?}", result.failed);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert!(result.manual_review.is_empty());
        assert!(result.ready_for_submission);
        // Every standard rule except FORMAT-REVIEW reports a pass.
        assert_eq!(result.passed.len(), RuleRegistry::standard().len() - 1);
    }

    #[test]
    fn test_gate_holds_without_structure_rule() {
        let mut snapshot = SnapshotBuilder::submission_ready();
        snapshot.proposal_sections.risks.draft = Some("  ".to_string());

        let mut registry = RuleRegistry::standard();
        registry.remove(&MissingDraftSections::ISSUE.code.into());
        let result = ComplianceValidator::with_registry(registry)
            .validate_at(ComplianceInput::from_snapshot(&snapshot), fixed_time());

        assert!(result.failed.is_empty());
        assert!(!result.ready_for_submission);
    }

    #[test]
    fn test_custom_rule_runs_in_registration_order() {
        let snapshot = SnapshotBuilder::new()
            .draft(SectionName::Abstract, "A focused abstract.")
            .build();
        let registry = RuleRegistry::new().with_rule(Arc::new(MissingDraftSections));
        let result = ComplianceValidator::with_registry(registry)
            .validate_at(ComplianceInput::from_snapshot(&snapshot), fixed_time());

        assert_eq!(result.failed.len(), 1);
        assert!(result.passed.is_empty());
        assert!(result.failed[0].description.starts_with("Missing draft content in: background"));
    }

    #[test]
    fn test_free_function_matches_validator() {
        let snapshot = SnapshotBuilder::submission_ready();
        let result = validate(
            &snapshot.requirements,
            &snapshot.proposal_sections,
            &snapshot.resources,
            &snapshot.project_info,
            &snapshot.reference_sources,
        );
        assert!(result.ready_for_submission);
        assert!(result.has_run());
    }
}
