//! Schedule retrieval endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uniplan_core_types::EntityKind;
use uniplan_errors::{ErrorKind, Result, UniError};

use crate::failure::ApiFailure;
use crate::state::AppState;

/// Parse the `{entity_kind}` path segment.
///
/// An unknown kind is classified as not-found: the path names a resource
/// collection that does not exist.
pub fn entity_kind_from_path(segment: &str) -> Result<EntityKind> {
    segment.parse::<EntityKind>().map_err(|err| {
        UniError::new(ErrorKind::NotFound)
            .with_op("schedule_get")
            .with_message(err.to_string())
    })
}

/// `GET /schedule/{entity_kind}/{entity_identifier}`
pub async fn get_schedule(
    State(state): State<AppState>,
    Path((entity_kind, entity_identifier)): Path<(String, String)>,
) -> std::result::Result<Json<Value>, ApiFailure> {
    let kind = entity_kind_from_path(&entity_kind)?;
    let document = state.ctx.engine.get_schedule(kind, &entity_identifier).await?;
    Ok(Json(document))
}
