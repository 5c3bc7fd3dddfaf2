// db/db.rs
use redis::aio::ConnectionManager;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
    pub redis_client: Option<Arc<ConnectionManager>>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("pool", &"Pool<Postgres>")
            .field("redis_client", &self.redis_client.is_some())
            .finish()
    }
}

impl DBClient {
    /// Create a new DBClient with PostgreSQL pool only
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient {
            pool,
            redis_client: None,
        }
    }

    /// Create a new DBClient with the response cache attached. Redis
    /// being unreachable is not fatal: the client degrades to
    /// database-only mode and the API keeps serving.
    pub async fn with_redis(pool: Pool<Postgres>, redis_url: &str) -> Self {
        let redis_client = match redis::Client::open(redis_url) {
            Ok(client) => match ConnectionManager::new(client).await {
                Ok(conn) => {
                    tracing::info!("✅ Redis connection established successfully");
                    Some(Arc::new(conn))
                }
                Err(e) => {
                    tracing::warn!("⚠️ Failed to connect to Redis: {}. Continuing without cache.", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("⚠️ Failed to create Redis client: {}. Continuing without cache.", e);
                None
            }
        };

        DBClient { pool, redis_client }
    }

    /// Check if the response cache is available
    pub fn is_redis_available(&self) -> bool {
        self.redis_client.is_some()
    }

    /// Cache status line for startup logging
    pub fn cache_status(&self) -> &str {
        if self.redis_client.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    }
}
