//! Macro target API routes

use crate::error::ApiError;
use crate::services::MacroService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use macrotrack_shared::types::{CaloriesResponse, MacrosFromAgeRequest, OnboardingRequest};
use macrotrack_shared::{MacroBreakdown, MacroTargets, ManualMacros};

/// Create macro routes
pub fn macro_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", post(daily_macros))
        .route("/from-age", post(macros_from_age))
        .route("/breakdown", post(macro_breakdown))
        .route("/manual", post(manual_macros))
        .route("/calories", post(calories_from_macros))
}

/// POST /api/v1/macros/daily - Targets from onboarding answers
///
/// Age is computed from `birthDate` as of the server's current UTC date.
async fn daily_macros(
    State(state): State<AppState>,
    Json(req): Json<OnboardingRequest>,
) -> Result<Json<MacroTargets>, ApiError> {
    let targets = MacroService::generate_daily(&req, state.tag_policy())?;
    Ok(Json(targets))
}

/// POST /api/v1/macros/from-age - Targets for a known age
async fn macros_from_age(
    State(state): State<AppState>,
    Json(req): Json<MacrosFromAgeRequest>,
) -> Result<Json<MacroTargets>, ApiError> {
    let targets = MacroService::generate_from_age(&req, state.tag_policy())?;
    Ok(Json(targets))
}

/// POST /api/v1/macros/breakdown - Targets plus every intermediate value
async fn macro_breakdown(
    State(state): State<AppState>,
    Json(req): Json<MacrosFromAgeRequest>,
) -> Result<Json<MacroBreakdown>, ApiError> {
    let breakdown = MacroService::breakdown(&req, state.tag_policy())?;
    Ok(Json(breakdown))
}

/// POST /api/v1/macros/manual
async fn manual_macros(Json(req): Json<ManualMacros>) -> Json<MacroTargets> {
    Json(MacroService::manual(&req))
}

/// POST /api/v1/macros/calories
async fn calories_from_macros(Json(req): Json<ManualMacros>) -> Json<CaloriesResponse> {
    Json(CaloriesResponse {
        calories: MacroService::calories(&req),
    })
}
