//! Length checks: abstract word count and per-section page limits.

use grant_assist_core::{
    format_amount, is_set, word_count, IssueCategory, PageLimits, SectionName, Severity,
};

use super::ABSTRACT_WORD_LIMIT;
use crate::rule::{ComplianceRule, IssueTemplate, RuleContext, RuleId, RuleOutcome};

/// The abstract stays within the word limit.
///
/// Uses the recorded `wordCount` whenever one is present (zero included),
/// otherwise counts whitespace-delimited tokens in the draft.
#[derive(Debug, Default, Clone)]
pub struct AbstractLength;

impl AbstractLength {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "LENGTH-01",
        category: IssueCategory::Length,
        name: "Abstract Length",
        severity: Severity::Failed,
        fix: "Reduce abstract length while preserving aims and impact.",
    };
}

impl ComplianceRule for AbstractLength {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Abstract is at most 300 words"
    }

    fn should_apply(&self, ctx: &RuleContext) -> bool {
        ctx.is_drafted(SectionName::Abstract)
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let section = &ctx.sections.r#abstract;
        let count = section.word_count.unwrap_or_else(|| {
            word_count(section.draft.as_deref().unwrap_or_default()) as f64
        });

        if count <= ABSTRACT_WORD_LIMIT as f64 {
            RuleOutcome::Passed(format!(
                "Abstract length is within {ABSTRACT_WORD_LIMIT} words."
            ))
        } else {
            RuleOutcome::Issue(Self::ISSUE.raise(format!(
                "Abstract has {} words. Maximum is {ABSTRACT_WORD_LIMIT} words.",
                format_amount(count)
            )))
        }
    }
}

/// A section's recorded page count stays within the funder's page limit.
///
/// Only runs when both the limit and the page count are set.
#[derive(Debug, Clone)]
pub struct PageLimitRule {
    section: SectionName,
    label: &'static str,
    issue: IssueTemplate,
}

impl PageLimitRule {
    /// Background section against `pageLimits.background`.
    pub fn background() -> Self {
        Self {
            section: SectionName::Background,
            label: "Background",
            issue: IssueTemplate {
                code: "LENGTH-02",
                category: IssueCategory::Length,
                name: "Background Page Limit",
                severity: Severity::Failed,
                fix: "Compress background rationale and move detailed material to methods.",
            },
        }
    }

    /// Methods section against `pageLimits.methods`.
    pub fn methods() -> Self {
        Self {
            section: SectionName::Methods,
            label: "Methods",
            issue: IssueTemplate {
                code: "LENGTH-03",
                category: IssueCategory::Length,
                name: "Methods Page Limit",
                severity: Severity::Failed,
                fix: "Move less critical protocol details to appendices and keep main flow concise.",
            },
        }
    }

    pub fn section(&self) -> SectionName {
        self.section
    }

    fn bounds(&self, ctx: &RuleContext) -> Option<(f64, f64)> {
        let limit = is_set(page_limit(&ctx.requirements.page_limits, self.section))?;
        let pages = is_set(ctx.sections.section(self.section).page_count)?;
        Some((pages, limit))
    }
}

fn page_limit(limits: &PageLimits, section: SectionName) -> Option<f64> {
    match section {
        SectionName::Background => limits.background,
        SectionName::Methods => limits.methods,
        _ => None,
    }
}

impl ComplianceRule for PageLimitRule {
    fn id(&self) -> RuleId {
        RuleId::new(self.issue.code)
    }

    fn category(&self) -> IssueCategory {
        self.issue.category
    }

    fn name(&self) -> &str {
        self.issue.name
    }

    fn description(&self) -> &str {
        "Section page count is within the configured page limit"
    }

    fn should_apply(&self, ctx: &RuleContext) -> bool {
        self.bounds(ctx).is_some()
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let Some((pages, limit)) = self.bounds(ctx) else {
            return RuleOutcome::Skip;
        };

        if pages <= limit {
            RuleOutcome::Passed(format!("{} section is within page limit.", self.label))
        } else {
            RuleOutcome::Issue(self.issue.raise(format!(
                "{} section uses {} pages. Limit is {}.",
                self.label,
                format_amount(pages),
                format_amount(limit)
            )))
        }
    }
}
