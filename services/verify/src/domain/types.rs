use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The triple a verification token encodes. Instants are integer milliseconds
/// since the Unix epoch; `expires` is fixed at issuance (`timestamp` + 24h),
/// not sliding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub email: String,
    pub timestamp: i64,
    pub expires: i64,
}

impl TokenRecord {
    /// Mint a record for `email` issued at `now_ms` with the fixed 24h window.
    pub fn issue(email: String, now_ms: i64) -> Self {
        Self {
            email,
            timestamp: now_ms,
            expires: now_ms + VERIFICATION_TTL_MS,
        }
    }
}

/// Outbox event for async delivery (verification email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

/// Verification token time-to-live in milliseconds (24 hours, fixed window).
pub const VERIFICATION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Milliseconds per hour, for expiry diagnostics.
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
