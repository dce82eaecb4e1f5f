//! Daily food log API routes

use crate::error::ApiError;
use crate::services::DailyLogService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use macrotrack_shared::types::{DailyLogResponse, DailyLogUpdateRequest};

/// Create daily log routes
pub fn daily_log_routes() -> Router<AppState> {
    Router::new().route("/", post(update_daily_log))
}

/// POST /api/v1/daily-log - Add or remove one food entry
///
/// The client owns the log; the server only applies the change and reports
/// progress when targets are included.
async fn update_daily_log(
    Json(req): Json<DailyLogUpdateRequest>,
) -> Result<Json<DailyLogResponse>, ApiError> {
    let response = DailyLogService::apply(req)?;
    Ok(Json(response))
}
