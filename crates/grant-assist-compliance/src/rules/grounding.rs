//! Grounding checks: bibliography and uploaded reference sources.

use grant_assist_core::{IssueCategory, Severity};

use crate::rule::{ComplianceRule, IssueTemplate, RuleContext, RuleOutcome};

/// The bibliography has at least one entry.
#[derive(Debug, Default, Clone)]
pub struct BibliographyPresent;

impl BibliographyPresent {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "CITE-01",
        category: IssueCategory::Citations,
        name: "Bibliography Missing",
        severity: Severity::Failed,
        fix: "Add at least core citations for each aim and method.",
    };
}

impl ComplianceRule for BibliographyPresent {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Bibliography contains at least one entry"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        if ctx.sections.bibliography.entries.is_empty() {
            RuleOutcome::Issue(Self::ISSUE.raise("No bibliography entries detected."))
        } else {
            RuleOutcome::Passed("Bibliography contains references.".to_string())
        }
    }
}

/// At least one reference source has been uploaded.
#[derive(Debug, Default, Clone)]
pub struct SourcePackPresent;

impl SourcePackPresent {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "EVID-01",
        category: IssueCategory::Evidence,
        name: "No Source Pack",
        severity: Severity::Warning,
        fix: "Upload papers, prior grants, or reviewer notes to ground claims.",
    };
}

impl ComplianceRule for SourcePackPresent {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Reference sources are attached for grounding"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        if ctx.reference_sources.is_empty() {
            RuleOutcome::Issue(Self::ISSUE.raise(
                "No source files are attached. Responses may rely on general knowledge only.",
            ))
        } else {
            RuleOutcome::Passed(
                "Source library includes uploaded research references.".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::outcome;
    use grant_assist_core::fixtures::SnapshotBuilder;

    #[test]
    fn test_empty_bibliography_fails() {
        let snapshot = SnapshotBuilder::new().build();
        match outcome(&BibliographyPresent, &snapshot) {
            RuleOutcome::Issue(issue) => {
                assert_eq!(issue.id, "CITE-01");
                assert_eq!(issue.severity, Severity::Failed);
            }
            other => panic!("Expected Issue, got {other:?}"),
        }
    }

    #[test]
    fn test_bibliography_entry_passes() {
        let snapshot = SnapshotBuilder::new().bibliography(&["Ref"]).build();
        assert!(matches!(
            outcome(&BibliographyPresent, &snapshot),
            RuleOutcome::Passed(_)
        ));
    }

    #[test]
    fn test_source_pack_is_warning_only() {
        let empty = SnapshotBuilder::new().build();
        match outcome(&SourcePackPresent, &empty) {
            RuleOutcome::Issue(issue) => assert_eq!(issue.severity, Severity::Warning),
            other => panic!("Expected Issue, got {other:?}"),
        }

        let with_source = SnapshotBuilder::new()
            .source("s1", "Prior grant", "grant.pdf")
            .build();
        assert!(matches!(
            outcome(&SourcePackPresent, &with_source),
            RuleOutcome::Passed(_)
        ));
    }
}
