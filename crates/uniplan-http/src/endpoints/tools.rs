//! Agent tool endpoints: listing and invocation.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uniplan_tools::ToolDescriptor;

use crate::failure::ApiFailure;
use crate::state::AppState;

/// `GET /tools`
pub async fn list(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.list())
}

/// `POST /tools/{name}` with the tool arguments as the JSON body.
pub async fn call(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiFailure> {
    let args = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    let result = state.registry.call(&name, args, &state.ctx).await?;
    Ok(Json(result))
}
