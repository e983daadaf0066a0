//! Compliance validation endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use grant_assist_compliance::{report_card, summarize, ComplianceReportCard, ComplianceSummary};
use grant_assist_core::ValidationResult;
use tracing::info;

use crate::types::{ApiResponse, ApiState, RuleInfo, ValidateRequest};

/// GET /api/rules - Registered rules in evaluation order.
pub async fn rules_handler(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<Vec<RuleInfo>>> {
    let rules = state
        .validator
        .registry()
        .iter()
        .map(|rule| RuleInfo::from_rule(rule.as_ref()))
        .collect();
    Json(ApiResponse::new(rules))
}

/// POST /api/validate - Run compliance validation.
pub async fn validate_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ValidateRequest>,
) -> Json<ApiResponse<ValidationResult>> {
    let result = state.validator.validate(request.input());
    info!(
        failed = result.failed.len(),
        warnings = result.warnings.len(),
        ready = result.ready_for_submission,
        "Validation request complete"
    );
    Json(ApiResponse::new(result))
}

/// POST /api/summary - Summarize a validation result.
pub async fn summary_handler(
    Json(result): Json<ValidationResult>,
) -> Json<ApiResponse<ComplianceSummary>> {
    Json(ApiResponse::new(summarize(&result)))
}

/// POST /api/report-card - Compact pass count plus failed and warning issues.
pub async fn report_card_handler(
    Json(result): Json<ValidationResult>,
) -> Json<ApiResponse<ComplianceReportCard>> {
    Json(ApiResponse::new(report_card(&result)))
}
