//! Employee full-text search and exact slug lookup.
//!
//! Matching policy is the union of a normalized full-text match and a
//! case-insensitive substring match over the space-joined (last, first,
//! middle) name, so both whole-word and partial-token queries work. Result
//! order is storage-determined; ties carry no guaranteed order.

use async_trait::async_trait;
use sqlx::PgPool;
use uniplan_core_types::Employee;
use uniplan_engine::ports::EmployeeDirectory;
use uniplan_errors::Result;

use crate::errors::from_sqlx;
use crate::rows::{EmployeeRow, EMPLOYEE_COLUMNS};

/// Bounds on a caller-supplied search limit.
pub(crate) fn clamp_limit(limit: i64, max: i64) -> i64 {
    limit.clamp(1, max)
}

#[derive(Clone)]
pub struct EmployeeSearchRepo {
    pool: PgPool,
}

impl EmployeeSearchRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search persons by concatenated name, capped at `limit` (clamped to
    /// [1, 100]). A blank query returns empty without touching storage.
    pub async fn search(&self, query: &str, limit: i64) -> Result<Vec<Employee>> {
        let clean_query = query.trim();
        if clean_query.is_empty() {
            return Ok(Vec::new());
        }
        let limit = clamp_limit(limit, 100);
        let pattern = format!("%{clean_query}%");

        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees \
             WHERE to_tsvector('simple', concat_ws(' ', last_name, first_name, middle_name)) \
                   @@ plainto_tsquery('simple', $1) \
                OR concat_ws(' ', last_name, first_name, middle_name) ILIKE $2 \
             LIMIT $3"
        );
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql)
            .bind(clean_query)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("employee_search"))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    /// Exact match on the canonical slug column.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<i64>> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM employees WHERE url_id = $1 LIMIT 1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(from_sqlx("employee_by_slug"))?;
        Ok(row.map(|(id,)| id))
    }
}

#[async_trait]
impl EmployeeDirectory for EmployeeSearchRepo {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<i64>> {
        EmployeeSearchRepo::find_by_slug(self, slug).await
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Employee>> {
        EmployeeSearchRepo::search(self, query, limit).await
    }
}
