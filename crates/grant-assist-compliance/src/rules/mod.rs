//! The standard compliance checks.
//!
//! Rules are grouped by check family. [`standard_rules`] lists them in the
//! order the validator runs them, which is also the order of every list in
//! the result.

/// Implements `id`, `category` and `name` from the rule's `ISSUE` template.
macro_rules! identity_from_issue {
    () => {
        fn id(&self) -> $crate::rule::RuleId {
            $crate::rule::RuleId::new(Self::ISSUE.code)
        }

        fn category(&self) -> grant_assist_core::IssueCategory {
            Self::ISSUE.category
        }

        fn name(&self) -> &str {
            Self::ISSUE.name
        }
    };
}

mod budget;
mod formatting;
mod grounding;
mod length;
mod plan;
mod structure;

use std::sync::Arc;

pub use budget::{AnnualBudgetMaximum, TotalBudgetCap};
pub use formatting::FormattingReview;
pub use grounding::{BibliographyPresent, SourcePackPresent};
pub use length::{AbstractLength, PageLimitRule};
pub use plan::AimCompleteness;
pub use structure::{MissingDraftSections, RequiredSectionsCoverage};

use crate::rule::ComplianceRule;

/// Maximum abstract length in words.
pub const ABSTRACT_WORD_LIMIT: usize = 300;

/// Complete aims needed to avoid the aim-completeness warning.
pub const MIN_COMPLETE_AIMS: usize = 2;

/// All standard rules in evaluation order.
pub fn standard_rules() -> Vec<Arc<dyn ComplianceRule>> {
    vec![
        Arc::new(MissingDraftSections),
        Arc::new(RequiredSectionsCoverage),
        Arc::new(AbstractLength),
        Arc::new(PageLimitRule::background()),
        Arc::new(PageLimitRule::methods()),
        Arc::new(BibliographyPresent),
        Arc::new(AnnualBudgetMaximum),
        Arc::new(TotalBudgetCap),
        Arc::new(AimCompleteness),
        Arc::new(SourcePackPresent),
        Arc::new(FormattingReview),
    ]
}
