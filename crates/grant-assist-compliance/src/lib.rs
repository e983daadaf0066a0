//! Compliance validation and readiness scoring for grant proposals.
//!
//! Two pure engines run over a [`ProposalSnapshot`](grant_assist_core::ProposalSnapshot):
//!
//! - **Validator**: runs an ordered set of rules (structure, length, citations,
//!   budget, scientific plan, evidence, formatting) and assembles a
//!   [`ValidationResult`] of passed notes, failed issues, warnings and manual
//!   review notes, plus a submission-readiness gate.
//! - **Readiness scorer**: derives a six-item checklist and a weighted 0-100
//!   score from the researcher profile, section state, the last validation
//!   result and the uploaded sources.
//!
//! ## Rules
//!
//! Each check is a [`ComplianceRule`] producing one [`RuleOutcome`]. Rules are
//! held in an ordered [`RuleRegistry`]; evaluation order is part of the output
//! contract, so [`RuleRegistry::standard`] always installs the checks in the
//! same sequence.
//!
//! ```text
//! STRUCT-01  all seven sections drafted          failed
//! STRUCT-02  funder-required sections covered    failed
//! LENGTH-01  abstract <= 300 words               failed
//! LENGTH-02  background within page limit        failed
//! LENGTH-03  methods within page limit           failed
//! CITE-01    bibliography present                failed
//! BUDGET-01  each year within annual maximum     failed / manual review
//! BUDGET-02  total within cap                    failed
//! AIMS-01    at least two complete aims          warning
//! EVID-01    reference sources uploaded          warning
//! formatting requirements configured             manual review
//! ```
//!
//! Neither engine performs I/O; the only impure input is the wall clock used
//! to stamp `lastRun`.

mod error;
mod readiness;
mod report;
mod rule;
pub mod rules;
mod validator;

pub use error::{ComplianceError, ComplianceResult};
pub use readiness::{
    build_readiness_snapshot, ReadinessInput, ReadinessItem, ReadinessSnapshot, ReadinessStatus,
};
pub use report::{
    next_action_text, report_card, summarize, top_blockers, CategoryBreakdown, ComplianceReportCard,
    ComplianceSummary,
};
pub use rule::{ComplianceRule, IssueTemplate, RuleContext, RuleId, RuleOutcome, RuleRegistry};
pub use validator::{validate, ComplianceInput, ComplianceValidator};

pub use grant_assist_core::{ComplianceIssue, IssueCategory, Severity, ValidationResult};
