//! Redis cache, shared across server instances.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use brain_core::ports::{Cache, CacheError};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    pub connect_timeout: Duration,
    /// Use the in-memory cache if Redis cannot be reached at startup.
    pub fallback_to_memory: bool,
}

impl RedisConfig {
    /// Returns `None` when `REDIS_URL` is unset.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("REDIS_URL").ok().filter(|s| !s.is_empty())?;

        Some(Self {
            url,
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            fallback_to_memory: std::env::var("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}

/// Redis-backed cache; the connection manager reconnects automatically.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(config: &RedisConfig) -> Result<Self, CacheError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| CacheError::Connection(e.to_string()))?;

        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::Connection("Connection timed out".to_string()))?
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis cache");

        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        let result = match ttl {
            // SETEX rejects a zero expiry
            Some(duration) => {
                conn.set_ex::<_, _, ()>(key, value, duration.as_secs().max(1))
                    .await
            }
            None => conn.set::<_, _, ()>(key, value).await,
        };

        result.map_err(|e| CacheError::Operation(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_cache() -> Option<RedisCache> {
        let config = RedisConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6389".to_string()),
            connect_timeout: Duration::from_secs(1),
            fallback_to_memory: false,
        };

        RedisCache::connect(&config).await.ok()
    }

    #[tokio::test]
    async fn test_redis_cache_set_get_delete() {
        let Some(cache) = get_test_cache().await else {
            tracing::warn!("Redis not available, skipping test");
            return;
        };

        let key = "otp:test@example.com";
        cache.set(key, "123456", None).await.unwrap();
        assert_eq!(cache.get(key).await.unwrap(), Some("123456".to_string()));

        cache.delete(key).await.unwrap();
        assert_eq!(cache.get(key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_cache_ttl() {
        let Some(cache) = get_test_cache().await else {
            return;
        };

        let key = "otp:ttl@example.com";
        cache
            .set(key, "654321", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        assert_eq!(cache.get(key).await.unwrap(), Some("654321".to_string()));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.get(key).await.unwrap(), None);
    }
}
