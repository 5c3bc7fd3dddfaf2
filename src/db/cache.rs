// db/cache.rs
use redis::{AsyncCommands, aio::ConnectionManager};
use std::sync::Arc;
use serde::{Serialize, de::DeserializeOwned};

/// Cache TTL constants (in seconds)
pub const RESPONSE_CACHE_TTL: usize = 3600; // 1 hour

pub struct CacheHelper;

impl CacheHelper {
    /// Generic get from cache
    pub async fn get<T: DeserializeOwned>(
        redis: &Arc<ConnectionManager>,
        key: &str,
    ) -> Result<Option<T>, redis::RedisError> {
        let mut redis = ConnectionManager::clone(&redis);
        let cached: Result<String, redis::RedisError> = redis.get(key).await;

        match cached {
            Ok(data) => {
                if let Ok(value) = serde_json::from_str::<T>(&data) {
                    tracing::debug!("Cache HIT: {}", key);
                    Ok(Some(value))
                } else {
                    tracing::warn!("Cache deserialization failed for: {}", key);
                    Ok(None)
                }
            }
            Err(_) => {
                tracing::debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    /// Generic set to cache with TTL
    pub async fn set<T: Serialize>(
        redis: &Arc<ConnectionManager>,
        key: &str,
        value: &T,
        ttl_seconds: usize,
    ) -> Result<(), redis::RedisError> {
        if let Ok(json) = serde_json::to_string(value) {
            let mut conn = ConnectionManager::clone(redis);
            let _: () = conn.set_ex(key, json, ttl_seconds).await?;
            tracing::debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
        }
        Ok(())
    }

    // Delete multiple keys matching a pattern using SCAN (non-blocking)
    pub async fn delete_pattern(
        redis: &Arc<ConnectionManager>,
        pattern: &str,
    ) -> Result<(), redis::RedisError> {
        let mut conn = ConnectionManager::clone(redis);
        let mut cursor: u64 = 0;
        let mut deleted_count = 0;

        loop {
            // SCAN returns (cursor, keys) and never blocks the server
            let (new_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                deleted_count += keys.len();
                let _: () = redis::AsyncCommands::del(&mut conn, &keys).await?;
            }

            cursor = new_cursor;
            if cursor == 0 {
                break;
            }
        }

        tracing::debug!("Cache DELETE pattern: {} ({} keys deleted)", pattern, deleted_count);
        Ok(())
    }
}
