use deadpool_redis::Pool;

use crate::domain::repository::UsedTokenStore;
use crate::error::VerifyServiceError;

/// Redis-backed claim-once store. `SET NX EX` is a single atomic command, so
/// concurrent claims for the same token resolve to exactly one winner, and the
/// marker expires together with the token itself.
#[derive(Clone)]
pub struct RedisUsedTokenStore {
    pub pool: Pool,
}

fn used_key(token: &str) -> String {
    format!("verify_used:{token}")
}

impl UsedTokenStore for RedisUsedTokenStore {
    async fn claim_once(&self, token: &str, ttl_secs: u64) -> Result<bool, VerifyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| VerifyServiceError::Internal(e.into()))?;
        let reply: Option<String> = deadpool_redis::redis::cmd("SET")
            .arg(used_key(token))
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| VerifyServiceError::Internal(e.into()))?;
        // SET NX replies "OK" on success and nil when the key already exists.
        Ok(reply.is_some())
    }
}
