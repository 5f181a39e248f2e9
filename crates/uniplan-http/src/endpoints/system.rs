//! System state endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::failure::ApiFailure;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrentWeekResponse {
    pub week_number: i64,
}

/// `GET /system/current-week`
pub async fn current_week(
    State(state): State<AppState>,
) -> Result<Json<CurrentWeekResponse>, ApiFailure> {
    let week_number = state.ctx.week.get_current_week().await?;
    Ok(Json(CurrentWeekResponse { week_number }))
}
