//! Error mapping for the storage layer
//!
//! Every sqlx failure becomes an `Unavailable` error tagged with the
//! failing operation; no driver types leak upward.

use uniplan_errors::{storage_unavailable, UniError};

/// Adapter for `.map_err(from_sqlx("op"))` call sites.
pub fn from_sqlx(op: &'static str) -> impl FnOnce(sqlx::Error) -> UniError {
    move |err| storage_unavailable(op, err)
}
