//! Collaborator ports consumed by the engine.
//!
//! Collaborators return plain absent/empty results rather than throwing
//! domain errors; the engine is the only place that classifies failures,
//! so classification logic is centralized and not duplicated per
//! transport. The only error a port may surface is storage
//! unavailability.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use uniplan_core_types::{DocumentLookup, Employee};
use uniplan_errors::Result;

/// Directory lookups over the staff table.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Exact match on the canonical url slug column. `None` when no row
    /// matches.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<i64>>;

    /// Ranked/substring search over the concatenated name, capped at
    /// `limit` rows. A blank query returns an empty list without touching
    /// storage.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Employee>>;
}

/// Temporal (SCD2) schedule snapshot access.
#[async_trait]
pub trait TemporalDocumentStore: Send + Sync {
    /// The most recently updated open-validity snapshot for the entity.
    /// Absent is a valid outcome, not an error; the engine turns it into
    /// a not-found failure.
    async fn fetch_current(&self, lookup: &DocumentLookup) -> Result<Option<Value>>;
}

/// Key-value rows of the `system_state` table.
#[async_trait]
pub trait SystemStateStore: Send + Sync {
    async fn read_value(&self, key: &str) -> Result<Option<String>>;
}

/// Get/set-with-expiry against the shared cache.
///
/// Implementations absorb every transport fault: a failed read is a miss,
/// a failed write is reported as `false` and otherwise ignored. The system
/// must stay correct with the cache degraded or unreachable.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Cached string value, or `None` on miss or any cache fault.
    async fn get(&self, key: &str) -> Option<String>;

    /// Best-effort write. Returns `false` when the write was dropped.
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> bool;
}
