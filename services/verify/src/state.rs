use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisUsedTokenStore;
use crate::infra::db::DbOutboxRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub public_base_url: String,
}

impl AppState {
    pub fn outbox_repo(&self) -> DbOutboxRepository {
        DbOutboxRepository {
            db: self.db.clone(),
        }
    }

    pub fn used_tokens(&self) -> RedisUsedTokenStore {
        RedisUsedTokenStore {
            pool: self.redis.clone(),
        }
    }
}
