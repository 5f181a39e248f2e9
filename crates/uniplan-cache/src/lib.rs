//! Key-value cache gateway
//!
//! Two providers behind one enum: a Redis-backed cache and an always-miss
//! no-op used when Redis is unreachable at startup. Enum dispatch keeps
//! the hot path free of vtables; the trait object surface is only crossed
//! once, at the engine boundary.
//!
//! Failure policy: the cache is an accelerator, never an authority. Every
//! transport fault is absorbed here: a failed read degrades to a miss, a
//! failed write is logged and dropped. No cache error ever reaches a
//! caller.

mod providers;

pub use providers::{NoopCache, RedisCache};

use async_trait::async_trait;
use std::time::Duration;
use uniplan_engine::ports::KeyValueCache;

/// Cache provider selected at startup.
#[derive(Clone)]
pub enum CacheProvider {
    Redis(RedisCache),
    Noop(NoopCache),
}

impl CacheProvider {
    /// Connect to Redis, degrading to the no-op provider when the server
    /// cannot be reached. Never fails startup.
    pub async fn connect_or_noop(redis_url: &str) -> CacheProvider {
        match RedisCache::connect(redis_url).await {
            Ok(cache) => CacheProvider::Redis(cache),
            Err(err) => {
                tracing::warn!(%err, "redis unreachable, caching disabled");
                CacheProvider::Noop(NoopCache)
            }
        }
    }
}

#[async_trait]
impl KeyValueCache for CacheProvider {
    async fn get(&self, key: &str) -> Option<String> {
        match self {
            CacheProvider::Redis(cache) => cache.get(key).await,
            CacheProvider::Noop(cache) => cache.get(key).await,
        }
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> bool {
        match self {
            CacheProvider::Redis(cache) => cache.set_with_expiry(key, value, ttl).await,
            CacheProvider::Noop(cache) => cache.set_with_expiry(key, value, ttl).await,
        }
    }
}
