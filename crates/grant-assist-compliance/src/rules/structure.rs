//! Structural checks: section drafts and funder-required sections.

use std::collections::HashSet;

use grant_assist_core::{IssueCategory, Severity};

use crate::rule::{ComplianceRule, IssueTemplate, RuleContext, RuleOutcome};

/// Every one of the seven sections has a non-blank draft.
#[derive(Debug, Default, Clone)]
pub struct MissingDraftSections;

impl MissingDraftSections {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "STRUCT-01",
        category: IssueCategory::Structure,
        name: "Missing Draft Sections",
        severity: Severity::Failed,
        fix: "Draft all core sections before final submission.",
    };
}

impl ComplianceRule for MissingDraftSections {
    identity_from_issue!();

    fn description(&self) -> &str {
        "All seven core sections contain draft content"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let missing = ctx.missing();
        if missing.is_empty() {
            return RuleOutcome::Passed(
                "All core proposal sections contain draft content.".to_string(),
            );
        }

        let names: Vec<&str> = missing.iter().map(|name| name.as_str()).collect();
        RuleOutcome::Issue(
            Self::ISSUE.raise(format!("Missing draft content in: {}.", names.join(", "))),
        )
    }
}

/// Funder-required sections are drafted. Names compare case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct RequiredSectionsCoverage;

impl RequiredSectionsCoverage {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "STRUCT-02",
        category: IssueCategory::Structure,
        name: "Required Sections Coverage",
        severity: Severity::Failed,
        fix: "Add missing required sections or update requirement mapping.",
    };
}

impl ComplianceRule for RequiredSectionsCoverage {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Funder-required sections are covered by drafted sections"
    }

    fn should_apply(&self, ctx: &RuleContext) -> bool {
        !ctx.requirements.required_sections.is_empty()
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let present: HashSet<&str> = ctx.drafted().iter().map(|name| name.as_str()).collect();

        // Lowercased and deduplicated, first occurrence wins.
        let mut seen = HashSet::new();
        let missing: Vec<String> = ctx
            .requirements
            .required_sections
            .iter()
            .map(|name| name.to_lowercase())
            .filter(|name| seen.insert(name.clone()))
            .filter(|name| !present.contains(name.as_str()))
            .collect();

        if missing.is_empty() {
            RuleOutcome::Passed("Configured required sections are covered.".to_string())
        } else {
            RuleOutcome::Issue(Self::ISSUE.raise(format!(
                "Required sections not yet covered: {}.",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{issue_description, outcome};
    use grant_assist_core::fixtures::SnapshotBuilder;
    use grant_assist_core::SectionName;

    #[test]
    fn test_missing_sections_listed_in_fixed_order() {
        let snapshot = SnapshotBuilder::new()
            .draft(SectionName::Budget, "Budget text")
            .draft(SectionName::Abstract, "Abstract text")
            .draft(SectionName::Methods, "   ")
            .build();

        let description = issue_description(outcome(&MissingDraftSections, &snapshot));
        assert_eq!(
            description,
            "Missing draft content in: background, aims, methods, innovation, risks."
        );
    }

    #[test]
    fn test_all_sections_drafted_passes() {
        let snapshot = SnapshotBuilder::new().draft_all().build();
        assert!(matches!(
            outcome(&MissingDraftSections, &snapshot),
            RuleOutcome::Passed(_)
        ));
    }

    #[test]
    fn test_required_sections_case_insensitive() {
        let snapshot = SnapshotBuilder::new()
            .draft(SectionName::Methods, "Methods text")
            .draft(SectionName::Risks, "Risks text")
            .required_sections(&["Methods", "BUDGET"])
            .build();

        let description = issue_description(outcome(&RequiredSectionsCoverage, &snapshot));
        assert_eq!(description, "Required sections not yet covered: budget.");
    }

    #[test]
    fn test_required_sections_deduplicated() {
        let snapshot = SnapshotBuilder::new()
            .required_sections(&["Budget", "budget", "Aims"])
            .build();

        let description = issue_description(outcome(&RequiredSectionsCoverage, &snapshot));
        assert_eq!(description, "Required sections not yet covered: budget, aims.");
    }

    #[test]
    fn test_required_sections_skipped_when_unconfigured() {
        let snapshot = SnapshotBuilder::new().build();
        assert_eq!(outcome(&RequiredSectionsCoverage, &snapshot), RuleOutcome::Skip);
    }

    #[test]
    fn test_unknown_required_name_is_never_covered() {
        let snapshot = SnapshotBuilder::new()
            .draft_all()
            .required_sections(&["Data Management Plan"])
            .build();

        let description = issue_description(outcome(&RequiredSectionsCoverage, &snapshot));
        assert_eq!(
            description,
            "Required sections not yet covered: data management plan."
        );
    }
}
