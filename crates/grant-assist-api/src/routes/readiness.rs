//! Readiness scoring endpoint.

use axum::Json;
use grant_assist_compliance::ReadinessSnapshot;
use tracing::info;

use crate::types::{ApiResponse, ReadinessRequest};

/// POST /api/readiness - Build the readiness checklist.
pub async fn readiness_handler(
    Json(request): Json<ReadinessRequest>,
) -> Json<ApiResponse<ReadinessSnapshot>> {
    let snapshot = request.input().snapshot();
    info!(
        score = snapshot.score,
        blockers = snapshot.blockers,
        "Readiness request complete"
    );
    Json(ApiResponse::new(snapshot))
}
