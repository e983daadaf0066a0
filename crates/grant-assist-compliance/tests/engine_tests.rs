//! End-to-end tests for the validator and readiness scorer over whole snapshots.

use grant_assist_compliance::{
    build_readiness_snapshot, summarize, validate, ComplianceInput, ComplianceValidator,
    ReadinessInput, RuleRegistry, Severity,
};
use grant_assist_core::fixtures::SnapshotBuilder;
use grant_assist_core::{ProposalSnapshot, SectionName, ValidationResult};

// ============================================================================
// Helpers
// ============================================================================

fn run(snapshot: &ProposalSnapshot) -> ValidationResult {
    ComplianceValidator::new().validate(ComplianceInput::from_snapshot(snapshot))
}

fn ids(issues: &[grant_assist_compliance::ComplianceIssue]) -> Vec<&str> {
    issues.iter().map(|issue| issue.id.as_str()).collect()
}

fn words(n: usize) -> String {
    vec!["lorem"; n].join(" ")
}

// ============================================================================
// Validator
// ============================================================================

#[test]
fn validator_is_deterministic_apart_from_timestamp() {
    let snapshot = SnapshotBuilder::new()
        .draft(SectionName::Abstract, &words(320))
        .budget_limits(Some(100.0), Some(250.0))
        .budget_totals([Some(50.0), Some(150.0), None, None], Some(300.0))
        .build();

    let first = run(&snapshot);
    let second = run(&snapshot);

    assert_eq!(first.passed, second.passed);
    assert_eq!(first.failed, second.failed);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.manual_review, second.manual_review);
    assert!(first.last_run.is_some());
}

#[test]
fn validator_empty_state() {
    let result = run(&ProposalSnapshot::default());

    let failed = ids(&result.failed);
    assert!(failed.contains(&"STRUCT-01"));
    assert!(failed.contains(&"CITE-01"));
    assert_eq!(ids(&result.warnings), vec!["AIMS-01", "EVID-01"]);
    assert!(!result.ready_for_submission);

    let readiness = ReadinessInput::from_snapshot(&ProposalSnapshot::default()).snapshot();
    assert!(readiness.blockers >= 4);
    assert!(!readiness.ready);
}

#[test]
fn validator_abstract_word_boundary() {
    let at_limit = SnapshotBuilder::new()
        .draft(SectionName::Abstract, &words(300))
        .build();
    let over_limit = SnapshotBuilder::new()
        .draft(SectionName::Abstract, &words(301))
        .build();
    let recorded = SnapshotBuilder::new()
        .draft(SectionName::Abstract, "brief")
        .word_count(SectionName::Abstract, 301.0)
        .build();

    assert!(!ids(&run(&at_limit).failed).contains(&"LENGTH-01"));
    assert!(ids(&run(&over_limit).failed).contains(&"LENGTH-01"));
    assert!(ids(&run(&recorded).failed).contains(&"LENGTH-01"));
}

#[test]
fn validator_honors_recorded_zero_word_count() -> anyhow::Result<()> {
    let json = format!(
        r#"{{"proposalSections": {{"abstract": {{"draft": "{}", "wordCount": 0}}}}}}"#,
        words(400)
    );
    let snapshot = ProposalSnapshot::from_json(&json)?;
    let result = run(&snapshot);

    assert!(!ids(&result.failed).contains(&"LENGTH-01"));
    assert!(result
        .passed
        .contains(&"Abstract length is within 300 words.".to_string()));
    Ok(())
}

#[test]
fn validator_cites_first_year_over_annual_maximum() {
    let snapshot = SnapshotBuilder::new()
        .budget_limits(Some(100.0), None)
        .budget_totals([Some(50.0), Some(150.0), Some(200.0), None], None)
        .build();
    let result = run(&snapshot);

    let issue = result.find_issue("BUDGET-01").unwrap();
    assert_eq!(issue.description, "Year 2 budget is 150. Maximum is 100.");
    assert_eq!(issue.severity, Severity::Failed);
}

#[test]
fn validator_source_pack_warning() {
    let without = run(&SnapshotBuilder::new().build());
    let with = run(&SnapshotBuilder::new().source("s", "Paper", "paper.pdf").build());

    assert!(ids(&without.warnings).contains(&"EVID-01"));
    assert!(!ids(&with.warnings).contains(&"EVID-01"));
}

#[test]
fn validator_required_sections_case_insensitive() {
    let snapshot = SnapshotBuilder::new()
        .required_sections(&["Methods", "BUDGET"])
        .draft(SectionName::Methods, "Protocol")
        .draft(SectionName::Risks, "Mitigations")
        .build();
    let result = run(&snapshot);

    let issue = result.find_issue("struct-02").unwrap();
    assert!(issue.description.contains("budget"));
    assert!(!issue.description.contains("methods"));
}

#[test]
fn validator_all_sections_drafted_clears_structure() {
    let snapshot = SnapshotBuilder::new()
        .draft_all()
        .bibliography(&["Ref A"])
        .build();
    let result = run(&snapshot);

    assert!(result.find_issue("STRUCT-01").is_none());
    assert!(result.failed.is_empty());
    assert!(result.ready_for_submission);
}

#[test]
fn validator_issue_lists_follow_rule_order() {
    let snapshot = SnapshotBuilder::new()
        .draft(SectionName::Abstract, &words(400))
        .required_sections(&["innovation"])
        .page_limits(Some(2.0), Some(3.0))
        .page_count(SectionName::Background, 4.0)
        .page_count(SectionName::Methods, 5.0)
        .budget_limits(Some(10.0), Some(10.0))
        .budget_totals([Some(20.0), None, None, None], Some(20.0))
        .build();
    let result = run(&snapshot);

    assert_eq!(
        ids(&result.failed),
        vec![
            "STRUCT-01",
            "STRUCT-02",
            "LENGTH-01",
            "LENGTH-02",
            "LENGTH-03",
            "CITE-01",
            "BUDGET-01",
            "BUDGET-02",
        ]
    );
}

#[test]
fn validator_free_function_uses_standard_rules() {
    let snapshot = SnapshotBuilder::submission_ready();
    let result = validate(
        &snapshot.requirements,
        &snapshot.proposal_sections,
        &snapshot.resources,
        &snapshot.project_info,
        &snapshot.reference_sources,
    );

    assert!(result.ready_for_submission);
    assert!(result.manual_review.is_empty());
    assert_eq!(result.passed.len(), RuleRegistry::standard().len() - 1);
}

// ============================================================================
// Readiness
// ============================================================================

#[test]
fn readiness_full_proposal_scores_100() {
    let mut snapshot = SnapshotBuilder::submission_ready();
    snapshot.validation = run(&snapshot);

    let readiness = build_readiness_snapshot(
        &snapshot.researcher_info,
        &snapshot.proposal_sections,
        &snapshot.validation,
        &snapshot.reference_sources,
    );

    assert_eq!(readiness.score, 100);
    assert_eq!(readiness.blockers, 0);
    assert!(readiness.ready);
}

#[test]
fn readiness_reflects_stale_validation() {
    // Drafts are complete but the stored validation has never run.
    let snapshot = SnapshotBuilder::submission_ready();
    let readiness = ReadinessInput::from_snapshot(&snapshot).snapshot();

    assert_eq!(readiness.blockers, 2);
    assert_eq!(readiness.score, 67);
    assert!(!readiness.ready);
}

// ============================================================================
// Store export
// ============================================================================

#[test]
fn store_export_round_trip_through_engines() -> anyhow::Result<()> {
    let json = r#"{
        "requirements": {
            "requiredSections": ["Abstract"],
            "budget": { "annualMaximum": 0, "totalMaximum": null, "currency": "NIS" },
            "formatting": { "font": "Arial", "margins": "2cm", "fileFormat": "PDF" }
        },
        "proposalSections": {
            "abstract": { "draft": "We study sleep.", "approved": true },
            "bibliography": { "entries": ["Ref"] }
        },
        "projectInfo": { "aims": [] },
        "referenceSources": []
    }"#;
    let snapshot = ProposalSnapshot::from_json(json)?;
    let result = run(&snapshot);

    assert_eq!(ids(&result.failed), vec!["STRUCT-01"]);
    assert_eq!(
        result.manual_review,
        vec!["Annual budget maximum is not configured.".to_string()]
    );

    let summary = summarize(&result);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.warnings, 2);

    let encoded = serde_json::to_value(&result)?;
    assert!(encoded["lastRun"].is_string());
    assert_eq!(encoded["failed"][0]["severity"], "failed");
    Ok(())
}
