//! Failure kind → HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uniplan_errors::{ErrorKind, UniError};

/// Response-side wrapper for the service error type.
///
/// The three-way distinction is load-bearing: collapsing `Ambiguous` into
/// a generic 4xx would lose the candidate list a client needs to proceed,
/// and collapsing `Unavailable` into `NotFound` would make transient
/// outages look like permanent absence.
#[derive(Debug)]
pub struct ApiFailure(pub UniError);

impl From<UniError> for ApiFailure {
    fn from(err: UniError) -> Self {
        ApiFailure(err)
    }
}

/// Status for a failure kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Ambiguous => StatusCode::CONFLICT,
        ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::Serialization | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind());
        let body = match err.kind() {
            ErrorKind::Ambiguous => err.ambiguous_payload(),
            ErrorKind::Unavailable => {
                // Connectivity details stay in the log, not the response.
                tracing::error!(op = err.op().unwrap_or("-"), %err, "storage unavailable");
                json!({ "detail": "Database unavailable" })
            }
            _ => {
                let detail = if err.message().is_empty() {
                    err.code()
                } else {
                    err.message()
                };
                json!({ "detail": detail })
            }
        };
        (status, Json(body)).into_response()
    }
}
