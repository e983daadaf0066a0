//! Error types for the compliance engine.
//!
//! Expected proposal conditions (missing drafts, unset limits) are never
//! errors; they become issues or manual review notes. Errors here are misuse
//! of the rule registry.

use thiserror::Error;

use crate::rule::RuleId;

/// Result type alias for compliance operations.
pub type ComplianceResult<T> = Result<T, ComplianceError>;

/// Errors that can occur when addressing rules.
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// A rule referenced by ID was not found in the registry.
    #[error("rule not found: {rule_id}")]
    RuleNotFound { rule_id: RuleId },
}
