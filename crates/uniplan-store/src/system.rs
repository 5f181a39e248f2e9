//! Key-value rows of the `system_state` table.

use async_trait::async_trait;
use sqlx::PgPool;
use uniplan_engine::ports::SystemStateStore;
use uniplan_errors::Result;

use crate::errors::from_sqlx;

#[derive(Clone)]
pub struct SystemStateRepo {
    pool: PgPool,
}

impl SystemStateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn read_value(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM system_state WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(from_sqlx("system_state_read"))?;
        Ok(row.map(|(value,)| value))
    }
}

#[async_trait]
impl SystemStateStore for SystemStateRepo {
    async fn read_value(&self, key: &str) -> Result<Option<String>> {
        SystemStateRepo::read_value(self, key).await
    }
}
