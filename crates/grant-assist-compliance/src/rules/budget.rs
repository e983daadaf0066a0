//! Budget checks against the funder's annual and total caps.

use grant_assist_core::{format_amount, is_set, IssueCategory, Severity};

use crate::rule::{ComplianceRule, IssueTemplate, RuleContext, RuleOutcome};

/// No single year exceeds the annual maximum.
///
/// Without a configured maximum the check falls back to manual review.
#[derive(Debug, Default, Clone)]
pub struct AnnualBudgetMaximum;

impl AnnualBudgetMaximum {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "BUDGET-01",
        category: IssueCategory::Budget,
        name: "Annual Maximum",
        severity: Severity::Failed,
        fix: "Rebalance staffing, equipment, and consumables for that year.",
    };
}

impl ComplianceRule for AnnualBudgetMaximum {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Each budget year stays within the annual maximum"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let Some(maximum) = is_set(ctx.requirements.budget.annual_maximum) else {
            return RuleOutcome::ManualReview(
                "Annual budget maximum is not configured.".to_string(),
            );
        };

        let years = ctx.resources.budget_totals.years();
        let violation = years
            .iter()
            .enumerate()
            .find_map(|(index, value)| value.filter(|v| *v > maximum).map(|v| (index + 1, v)));

        match violation {
            None => RuleOutcome::Passed("Annual budget totals are within limit.".to_string()),
            Some((year, value)) => RuleOutcome::Issue(Self::ISSUE.raise(format!(
                "Year {year} budget is {}. Maximum is {}.",
                format_amount(value),
                format_amount(maximum)
            ))),
        }
    }
}

/// The grand total stays within the total cap. Runs only when both are set.
#[derive(Debug, Default, Clone)]
pub struct TotalBudgetCap;

impl TotalBudgetCap {
    pub const ISSUE: IssueTemplate = IssueTemplate {
        code: "BUDGET-02",
        category: IssueCategory::Budget,
        name: "Total Budget Cap",
        severity: Severity::Failed,
        fix: "Reduce total requested amount or adjust project scope.",
    };
}

fn total_and_cap(ctx: &RuleContext) -> Option<(f64, f64)> {
    let cap = is_set(ctx.requirements.budget.total_maximum)?;
    let total = is_set(ctx.resources.budget_totals.total)?;
    Some((total, cap))
}

impl ComplianceRule for TotalBudgetCap {
    identity_from_issue!();

    fn description(&self) -> &str {
        "Total requested budget stays within the total cap"
    }

    fn should_apply(&self, ctx: &RuleContext) -> bool {
        total_and_cap(ctx).is_some()
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome {
        let Some((total, cap)) = total_and_cap(ctx) else {
            return RuleOutcome::Skip;
        };

        if total <= cap {
            RuleOutcome::Passed("Total budget is within configured cap.".to_string())
        } else {
            RuleOutcome::Issue(Self::ISSUE.raise(format!(
                "Total budget is {}. Maximum is {}.",
                format_amount(total),
                format_amount(cap)
            )))
        }
    }
}
