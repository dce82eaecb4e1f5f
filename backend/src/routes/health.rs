//! Health endpoints for the macro calculator
//!
//! The service has no database or cache to probe, so being able to answer is
//! the whole check. Both endpoints also report which tag policy the running
//! instance applies, since that decides whether loosely tagged client
//! requests are accepted or rejected.

use crate::state::AppState;
use axum::{extract::State, Json};
use macrotrack_shared::TagPolicy;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub input_policy: TagPolicy,
}

impl HealthResponse {
    fn new(status: &'static str, state: &AppState) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            input_policy: state.tag_policy(),
        }
    }
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", &state))
}

/// GET /health/live - liveness probe
pub async fn liveness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("alive", &state))
}
