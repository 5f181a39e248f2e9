//! Current academic week, cached under a fixed key.
//!
//! Same get/set-with-expiry discipline as schedule retrieval, simpler
//! domain: the value is an integer stored as a decimal string.

use std::sync::Arc;
use std::time::Duration;

use uniplan_core_types::keys;
use uniplan_errors::{ErrorKind, Result, UniError};

use crate::ports::{KeyValueCache, SystemStateStore};

/// Row key in the `system_state` table.
pub const CURRENT_WEEK_STATE_KEY: &str = "current_week";

pub struct CurrentWeekService {
    state: Arc<dyn SystemStateStore>,
    cache: Arc<dyn KeyValueCache>,
    cache_ttl: Duration,
}

impl CurrentWeekService {
    pub fn new(
        state: Arc<dyn SystemStateStore>,
        cache: Arc<dyn KeyValueCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            state,
            cache,
            cache_ttl,
        }
    }

    /// Current academic week number.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::NotFound`: no `current_week` row in system state.
    /// - `ErrorKind::Unavailable`: storage unreachable.
    pub async fn get_current_week(&self) -> Result<i64> {
        if let Some(cached) = self.cache.get(keys::SYSTEM_CURRENT_WEEK).await {
            match cached.trim().parse::<i64>() {
                Ok(week) => return Ok(week),
                Err(_) => {
                    tracing::warn!(value = %cached, "malformed cached week number, treating as miss");
                }
            }
        }

        let value = self
            .state
            .read_value(CURRENT_WEEK_STATE_KEY)
            .await?
            .ok_or_else(|| {
                UniError::new(ErrorKind::NotFound)
                    .with_op("current_week")
                    .with_message("Current week not found in system state")
            })?;

        let week = value.trim().parse::<i64>().map_err(|_| {
            UniError::new(ErrorKind::Internal)
                .with_op("current_week")
                .with_message(format!("system state holds a non-numeric week: {value}"))
        })?;

        if !self
            .cache
            .set_with_expiry(keys::SYSTEM_CURRENT_WEEK, &week.to_string(), self.cache_ttl)
            .await
        {
            tracing::warn!("current week cache write dropped");
        }

        Ok(week)
    }
}
