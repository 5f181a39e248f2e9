//! Database pool construction

use crate::errors::from_sqlx;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uniplan_errors::Result;

/// Build a lazily-connecting Postgres pool.
///
/// Connections are checked before each acquire, so a restarted database
/// is picked up transparently between requests.
pub fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .test_before_acquire(true)
        .connect_lazy(database_url)
        .map_err(from_sqlx("pool_connect"))
}
