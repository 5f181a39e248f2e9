//! Route table.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::endpoints;
use crate::state::AppState;
use crate::trace;

/// Build the application router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/schedule/:entity_kind/:entity_identifier",
            get(endpoints::schedule::get_schedule),
        )
        .route("/employees/search", get(endpoints::employees::search))
        .route("/structure/faculties", get(endpoints::structure::faculties))
        .route(
            "/structure/departments",
            get(endpoints::structure::departments),
        )
        .route(
            "/structure/specialities",
            get(endpoints::structure::specialities),
        )
        .route("/structure/groups", get(endpoints::structure::groups))
        .route("/structure/employees", get(endpoints::structure::employees))
        .route("/auditories/free", get(endpoints::auditories::free))
        .route("/system/current-week", get(endpoints::system::current_week))
        .route("/tools", get(endpoints::tools::list))
        .route("/tools/:name", post(endpoints::tools::call))
        .layer(middleware::from_fn(trace::request_span))
        .with_state(state)
}
