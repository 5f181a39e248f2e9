//! HTTP transport
//!
//! Thin axum handlers over the engine and the repositories. This layer
//! owns exactly one piece of logic: mapping the tagged failure kinds to
//! HTTP statuses (404 / 409-with-candidates / 503 / 400). It never
//! inspects error message text.

pub mod endpoints;
pub mod failure;
pub mod router;
pub mod state;
pub mod trace;

pub use failure::ApiFailure;
pub use router::router;
pub use state::AppState;
