//! Free-auditorium endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use uniplan_errors::invalid_input;
use uniplan_store::FreeRoom;

use crate::failure::ApiFailure;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FreeParams {
    pub day_of_week: String,
    pub week_number: i32,
    pub time: String,
    pub building_number: Option<i32>,
}

/// `GET /auditories/free?day_of_week=&week_number=&time=&building_number=`
pub async fn free(
    State(state): State<AppState>,
    Query(params): Query<FreeParams>,
) -> Result<Json<Vec<FreeRoom>>, ApiFailure> {
    if !(1..=4).contains(&params.week_number) {
        return Err(invalid_input("week_number must be between 1 and 4").into());
    }
    let rooms = state
        .ctx
        .rooms
        .free_rooms(
            &params.day_of_week,
            params.week_number,
            &params.time,
            params.building_number,
        )
        .await?;
    Ok(Json(rooms))
}
