//! Staff directory search endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use uniplan_core_types::Employee;
use uniplan_errors::invalid_input;

use crate::failure::ApiFailure;
use crate::state::AppState;

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// `GET /employees/search?q=&limit=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Employee>>, ApiFailure> {
    if params.q.trim().is_empty() {
        return Err(invalid_input("q must not be empty").into());
    }
    let found = state.ctx.search.search(&params.q, params.limit).await?;
    Ok(Json(found))
}
