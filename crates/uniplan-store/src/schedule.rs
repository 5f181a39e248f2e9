//! Temporal schedule snapshot access (SCD2).
//!
//! Snapshots are versioned rows with a validity interval; exactly one row
//! per entity is expected to have an open end (`valid_to IS NULL`). More
//! than one open row is an upstream data anomaly; the most recently
//! updated one wins, with unset update timestamps sorted last.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::Value;
use sqlx::PgPool;
use uniplan_core_types::DocumentLookup;
use uniplan_engine::ports::TemporalDocumentStore;
use uniplan_errors::Result;

use crate::errors::from_sqlx;

#[derive(Debug, sqlx::FromRow)]
struct SnapshotRow {
    data: Value,
    api_last_update_ts: Option<NaiveDateTime>,
}

/// First row with the greatest update timestamp; `None` timestamps are
/// treated as oldest.
fn most_recent(rows: Vec<SnapshotRow>) -> Option<SnapshotRow> {
    let mut best: Option<SnapshotRow> = None;
    for row in rows {
        match &best {
            Some(current) if row.api_last_update_ts <= current.api_last_update_ts => {}
            _ => best = Some(row),
        }
    }
    best
}

#[derive(Clone)]
pub struct ScheduleSnapshotRepo {
    pool: PgPool,
}

impl ScheduleSnapshotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The current (open-validity) snapshot document for the entity,
    /// or `None` when no row qualifies.
    pub async fn fetch_current(&self, lookup: &DocumentLookup) -> Result<Option<Value>> {
        let rows: Vec<SnapshotRow> = match lookup {
            DocumentLookup::Group(name) => {
                sqlx::query_as(
                    "SELECT data, api_last_update_ts FROM schedule_json_storage \
                     WHERE valid_to IS NULL AND group_name = $1",
                )
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
            DocumentLookup::Employee(id) => {
                sqlx::query_as(
                    "SELECT data, api_last_update_ts FROM schedule_json_storage \
                     WHERE valid_to IS NULL AND employee_id = $1",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(from_sqlx("fetch_current_schedule"))?;

        if rows.len() > 1 {
            tracing::warn!(
                ?lookup,
                open_rows = rows.len(),
                "multiple open-validity snapshots for one entity"
            );
        }

        Ok(most_recent(rows).map(|row| row.data))
    }
}

#[async_trait]
impl TemporalDocumentStore for ScheduleSnapshotRepo {
    async fn fetch_current(&self, lookup: &DocumentLookup) -> Result<Option<Value>> {
        ScheduleSnapshotRepo::fetch_current(self, lookup).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(day: u32) -> Option<NaiveDateTime> {
        Some(
            NaiveDate::from_ymd_opt(2025, 9, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn row(tag: &str, ts: Option<NaiveDateTime>) -> SnapshotRow {
        SnapshotRow {
            data: json!({ "tag": tag }),
            api_last_update_ts: ts,
        }
    }

    #[test]
    fn test_empty_rows_select_nothing() {
        assert!(most_recent(vec![]).is_none());
    }

    #[test]
    fn test_single_row_wins_regardless_of_timestamp() {
        let picked = most_recent(vec![row("only", None)]).unwrap();
        assert_eq!(picked.data["tag"], "only");
    }

    #[test]
    fn test_latest_update_wins_among_multiple_open_rows() {
        let picked = most_recent(vec![
            row("older", at(1)),
            row("newest", at(9)),
            row("middle", at(4)),
        ])
        .unwrap();
        assert_eq!(picked.data["tag"], "newest");
    }

    #[test]
    fn test_null_timestamps_sort_last() {
        let picked = most_recent(vec![row("untimed", None), row("timed", at(2))]).unwrap();
        assert_eq!(picked.data["tag"], "timed");
    }

    #[test]
    fn test_all_null_timestamps_keep_first_row() {
        let picked = most_recent(vec![row("first", None), row("second", None)]).unwrap();
        assert_eq!(picked.data["tag"], "first");
    }
}
