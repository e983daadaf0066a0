//! Formatting requirements cannot be verified automatically; flag gaps for a human.

use grant_assist_core::IssueCategory;

use crate::rule::{ComplianceRule, RuleContext, RuleId, RuleOutcome};

#[derive(Debug, Default, Clone)]
pub struct FormattingReview;

impl ComplianceRule for FormattingReview {
    fn id(&self) -> RuleId {
        RuleId::new("FORMAT-REVIEW")
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Formatting
    }

    fn name(&self) -> &str {
        "Formatting Review"
    }

    fn description(&self) -> &str {
        "Font, margins and file format requirements are recorded"
    }

    fn should_apply(&self, ctx: &RuleContext) -> bool {
        !ctx.requirements.formatting.is_complete()
    }

    fn evaluate(&self, _ctx: &RuleContext) -> RuleOutcome {
        RuleOutcome::ManualReview(
            "Formatting requirements are partially missing. Verify font, margins, and file format manually."
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::outcome;
    use grant_assist_core::fixtures::SnapshotBuilder;

    #[test]
    fn test_partial_formatting_needs_review() {
        let snapshot = SnapshotBuilder::new().formatting("Arial 11", "", "PDF").build();
        assert!(matches!(
            outcome(&FormattingReview, &snapshot),
            RuleOutcome::ManualReview(_)
        ));
    }

    #[test]
    fn test_complete_formatting_is_silent() {
        let snapshot = SnapshotBuilder::new()
            .formatting("Arial 11", "2cm", "PDF")
            .build();
        assert_eq!(outcome(&FormattingReview, &snapshot), RuleOutcome::Skip);
    }
}
