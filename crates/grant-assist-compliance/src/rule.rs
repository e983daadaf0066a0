//! Rule abstractions for compliance checks.
//!
//! A rule inspects the proposal snapshot and produces exactly one outcome:
//! a passed note, an issue, a manual review note, or nothing at all. The
//! validator applies rules in registry order and files each outcome into the
//! matching list of the result.

use std::fmt;
use std::sync::Arc;

use grant_assist_core::{
    ComplianceIssue, IssueCategory, ProjectInfo, ProposalSections, ReferenceSource, Requirements,
    Resources, SectionName, Severity,
};
use serde::{Deserialize, Serialize};

use crate::error::{ComplianceError, ComplianceResult};
use crate::validator::ComplianceInput;

/// Unique identifier for a rule.
///
/// Rules that raise issues use the issue's stable code (`STRUCT-01`) as their
/// ID so a registry lookup and a "fix this issue" link agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the rule name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Static description of the issue a rule raises on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTemplate {
    pub code: &'static str,
    pub category: IssueCategory,
    pub name: &'static str,
    pub severity: Severity,
    pub fix: &'static str,
}

impl IssueTemplate {
    /// Build a concrete issue with a run-specific description.
    pub fn raise(&self, description: impl Into<String>) -> ComplianceIssue {
        ComplianceIssue {
            id: self.code.to_string(),
            category: self.category,
            name: self.name.to_string(),
            description: description.into(),
            severity: self.severity,
            fix: Some(self.fix.to_string()),
        }
    }
}

/// Context provided to a rule during evaluation.
///
/// Wraps the validator input and caches the drafted/missing section lists,
/// which several rules and the readiness gate share.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub requirements: &'a Requirements,
    pub sections: &'a ProposalSections,
    pub resources: &'a Resources,
    pub project_info: &'a ProjectInfo,
    pub reference_sources: &'a [ReferenceSource],
    drafted: Vec<SectionName>,
    missing: Vec<SectionName>,
}

impl<'a> RuleContext<'a> {
    /// Build a context from validator input.
    pub fn new(input: ComplianceInput<'a>) -> Self {
        Self {
            requirements: input.requirements,
            sections: input.sections,
            resources: input.resources,
            project_info: input.project_info,
            reference_sources: input.reference_sources,
            drafted: input.sections.drafted(),
            missing: input.sections.missing(),
        }
    }

    /// Sections with non-blank drafts, in canonical order.
    pub fn drafted(&self) -> &[SectionName] {
        &self.drafted
    }

    /// Sections without a draft, in canonical order.
    pub fn missing(&self) -> &[SectionName] {
        &self.missing
    }

    pub fn is_drafted(&self, name: SectionName) -> bool {
        self.drafted.contains(&name)
    }
}

/// Outcome of applying a rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// Check passed; carries a human-readable note.
    Passed(String),

    /// Check raised an issue (failed or warning, per its severity).
    Issue(ComplianceIssue),

    /// Check could not be evaluated automatically.
    ManualReview(String),

    /// Check did not apply to this snapshot.
    Skip,
}

/// A compliance check over proposal state.
///
/// Rules are pure: identical context always yields an identical outcome.
pub trait ComplianceRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Check family, used for grouping in reports.
    fn category(&self) -> IssueCategory;

    /// Short display name.
    fn name(&self) -> &str;

    /// Human-readable description of what is checked.
    fn description(&self) -> &str {
        ""
    }

    /// Check preconditions. Rules that only run when a requirement is
    /// configured override this; a `false` here is recorded as [`RuleOutcome::Skip`].
    fn should_apply(&self, ctx: &RuleContext) -> bool {
        let _ = ctx;
        true
    }

    /// Evaluate the check.
    fn evaluate(&self, ctx: &RuleContext) -> RuleOutcome;
}

/// Ordered registry of rules.
///
/// Iteration order is registration order and defines the order of every list
/// in the validation result.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Arc<dyn ComplianceRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry with the standard checks in their fixed order.
    pub fn standard() -> Self {
        crate::rules::standard_rules()
            .into_iter()
            .fold(Self::new(), |registry, rule| registry.with_rule(rule))
    }

    /// Register a rule. A rule with an existing ID replaces it in place.
    pub fn register(&mut self, rule: Arc<dyn ComplianceRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Register a rule (builder pattern).
    pub fn with_rule(mut self, rule: Arc<dyn ComplianceRule>) -> Self {
        self.register(rule);
        self
    }

    /// Remove a rule by ID, returning it if present.
    pub fn remove(&mut self, id: &RuleId) -> Option<Arc<dyn ComplianceRule>> {
        let index = self.rules.iter().position(|r| &r.id() == id)?;
        Some(self.rules.remove(index))
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&Arc<dyn ComplianceRule>> {
        self.rules.iter().find(|r| &r.id() == id)
    }

    /// Check if a rule exists.
    pub fn contains(&self, id: &RuleId) -> bool {
        self.get(id).is_some()
    }

    /// List all registered rule IDs in order.
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Iterate rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ComplianceRule>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply a rule by ID to the given context, honoring its preconditions.
    pub fn apply_rule(&self, id: &RuleId, ctx: &RuleContext) -> ComplianceResult<RuleOutcome> {
        let rule = self.get(id).ok_or_else(|| ComplianceError::RuleNotFound {
            rule_id: id.clone(),
        })?;

        Ok(apply(rule.as_ref(), ctx))
    }
}

/// Evaluate a rule if its preconditions hold.
pub(crate) fn apply(rule: &dyn ComplianceRule, ctx: &RuleContext) -> RuleOutcome {
    if rule.should_apply(ctx) {
        rule.evaluate(ctx)
    } else {
        RuleOutcome::Skip
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rule_count", &self.rules.len())
            .field("rules", &self.rule_ids())
            .finish()
    }
}
