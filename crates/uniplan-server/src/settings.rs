//! Environment-driven configuration.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

fn default_max_connections() -> u32 {
    5
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_schedule_ttl() -> u64 {
    600
}

fn default_week_ttl() -> u64 {
    5000
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Postgres connection string. The only setting without a default.
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    /// Schedule document TTL, seconds.
    #[serde(default = "default_schedule_ttl")]
    pub schedule_cache_ttl: u64,
    /// Current-week TTL, seconds.
    #[serde(default = "default_week_ttl")]
    pub current_week_cache_ttl: u64,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// `development`, `production` or `test`.
    #[serde(default)]
    pub log_profile: Option<String>,
}

impl Settings {
    /// Load from the process environment (after `.env` has been applied).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Settings {
        Config::builder()
            .set_override("database_url", "postgres://localhost/uniplan")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let settings = minimal();
        assert_eq!(settings.database_max_connections, 5);
        assert_eq!(settings.schedule_cache_ttl, 600);
        assert_eq!(settings.current_week_cache_ttl, 5000);
        assert_eq!(settings.bind_addr, "0.0.0.0:8000");
        assert_eq!(settings.redis_url, "redis://127.0.0.1:6379");
        assert!(settings.log_profile.is_none());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let settings: Settings = Config::builder()
            .set_override("database_url", "postgres://db/uniplan")
            .unwrap()
            .set_override("schedule_cache_ttl", 60)
            .unwrap()
            .set_override("log_profile", "production")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.schedule_cache_ttl, 60);
        assert_eq!(settings.log_profile.as_deref(), Some("production"));
    }
}
