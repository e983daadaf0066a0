//! Scientific plan checks.

use grant_assist_core::{IssueCategory, Severity};

use super::MIN_COMPLETE_AIMS;
use crate::rule::{ComplianceRule, IssueTemplate, RuleContext, RuleOutcome};

/// At least two aims carry a title plus a hypothesis or approach.
#[derive(Debug, Default, Clone)]
pub struct AimCompleteness;

impl AimCompleteness {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "AIMS-01",
        category: IssueCategory::ScientificPlan,
        name: "Aim Completeness",
        severity: Severity::Warning,
        fix: "Define at least two standalone aims with measurable outcomes.",
    };
}

impl ComplianceRule for AimCompleteness {
    identity_from_issue!();

    fn description(&self) -> &str {
        "At least two aims are fully specified"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        if ctx.project_info.complete_aims() >= MIN_COMPLETE_AIMS {
            RuleOutcome::Passed("At least two complete aims are documented.".to_string())
        } else {
            RuleOutcome::Issue(Self::ISSUE.raise(
                "Fewer than two aims have both a title and a hypothesis/approach.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::outcome;
    use grant_assist_core::fixtures::SnapshotBuilder;
    use grant_assist_core::Aim;

    #[test]
    fn test_two_complete_aims_pass() {
        let snapshot = SnapshotBuilder::new().complete_aims(2).build();
        assert!(matches!(
            outcome(&AimCompleteness, &snapshot),
            RuleOutcome::Passed(_)
        ));
    }

    #[test]
    fn test_title_only_aim_does_not_count() {
        let snapshot = SnapshotBuilder::new()
            .complete_aims(1)
            .aim(Aim {
                number: 2,
                title: Some("Map circuits".to_string()),
                hypothesis: Some("   ".to_string()),
                approach: None,
            })
            .build();
        match outcome(&AimCompleteness, &snapshot) {
            RuleOutcome::Issue(issue) => {
                assert_eq!(issue.severity, Severity::Warning);
                assert_eq!(issue.category, IssueCategory::ScientificPlan);
            }
            other => panic!("Expected Issue, got {other:?}"),
        }
    }
}
