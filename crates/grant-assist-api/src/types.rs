//! API types and DTOs.

use std::time::{SystemTime, UNIX_EPOCH};

use grant_assist_compliance::{ComplianceInput, ComplianceRule, ComplianceValidator, ReadinessInput};
use grant_assist_core::{
    IssueCategory, ProjectInfo, ProposalSections, ReferenceSource, Requirements, ResearcherInfo,
    Resources, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Shared application state for the API.
#[derive(Debug)]
pub struct ApiState {
    pub validator: ComplianceValidator,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Create a new API response with current timestamp.
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of registered compliance rules.
    pub rules: usize,
}

/// Public description of a registered rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub category: IssueCategory,
    pub name: String,
    pub description: String,
}

impl RuleInfo {
    pub fn from_rule(rule: &dyn ComplianceRule) -> Self {
        Self {
            id: rule.id().to_string(),
            category: rule.category(),
            name: rule.name().to_string(),
            description: rule.description().to_string(),
        }
    }
}

/// Body of `POST /validate`. Missing keys take their fresh-proposal defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateRequest {
    pub requirements: Requirements,
    pub proposal_sections: ProposalSections,
    pub resources: Resources,
    pub project_info: ProjectInfo,
    pub reference_sources: Vec<ReferenceSource>,
}

impl ValidateRequest {
    pub fn input(&self) -> ComplianceInput<'_> {
        ComplianceInput {
            requirements: &self.requirements,
            sections: &self.proposal_sections,
            resources: &self.resources,
            project_info: &self.project_info,
            reference_sources: &self.reference_sources,
        }
    }
}

/// Body of `POST /readiness`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadinessRequest {
    pub researcher_info: ResearcherInfo,
    pub proposal_sections: ProposalSections,
    pub validation: ValidationResult,
    pub reference_sources: Vec<ReferenceSource>,
}

impl ReadinessRequest {
    pub fn input(&self) -> ReadinessInput<'_> {
        ReadinessInput {
            researcher_info: &self.researcher_info,
            sections: &self.proposal_sections,
            validation: &self.validation,
            reference_sources: &self.reference_sources,
        }
    }
}
