//! HTTP API for the compliance engine.
//!
//! Stateless: every request carries the proposal state it should be checked
//! against, and nothing is stored between calls.
//!
//! ## Endpoints
//!
//! - `GET /health` - Service status and number of registered rules
//! - `GET /rules` - Registered compliance rules in evaluation order
//! - `POST /validate` - Run compliance validation over proposal state
//! - `POST /readiness` - Build the submission readiness checklist
//! - `POST /summary` - Dashboard summary of a validation result
//! - `POST /report-card` - Pass count plus failed and warning issues
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grant_assist_api::{create_api_router, create_api_state};
//!
//! # async fn serve() -> std::io::Result<()> {
//! let app = axum::Router::new().nest("/api", create_api_router(create_api_state()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

mod routes;
mod types;

pub use routes::create_api_router;
pub use types::{
    ApiResponse, ApiState, HealthResponse, ReadinessRequest, RuleInfo, ValidateRequest,
};

use std::sync::Arc;

use grant_assist_compliance::{ComplianceValidator, RuleRegistry};

/// API state with the standard rule set.
pub fn create_api_state() -> Arc<ApiState> {
    create_api_state_with_registry(RuleRegistry::standard())
}

/// API state validating with a custom registry.
pub fn create_api_state_with_registry(registry: RuleRegistry) -> Arc<ApiState> {
    Arc::new(ApiState {
        validator: ComplianceValidator::with_registry(registry),
    })
}
