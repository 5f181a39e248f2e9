//! Cache provider implementations.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::time::Duration;
use thiserror::Error;
use uniplan_engine::ports::KeyValueCache;

/// Internal transport fault, absorbed before the gateway boundary.
#[derive(Debug, Error)]
pub(crate) enum CacheError {
    #[error("redis command failed: {0}")]
    Command(#[from] redis::RedisError),
}

/// Redis-backed provider over an auto-reconnecting connection manager.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Open a client and establish the managed connection.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self { manager })
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    async fn try_set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        // SETEX rejects a zero expiry; clamp up to one second.
        let seconds = ttl.as_secs().max(1);
        redis::cmd("SETEX")
            .arg(key)
            .arg(seconds)
            .arg(value)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueCache for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> bool {
        match self.try_set(key, value, ttl).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key, %err, "cache write failed, dropping entry");
                false
            }
        }
    }
}

/// Always-miss, always-"ok" provider for running without a cache server.
#[derive(Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl KeyValueCache for NoopCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set_with_expiry(&self, _key: &str, _value: &str, _ttl: Duration) -> bool {
        // Dropping the write is this provider's contract; report it so
        // callers do not log every set as a failure.
        true
    }
}
