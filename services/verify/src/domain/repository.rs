#![allow(async_fn_in_trait)]

use crate::domain::types::OutboxEvent;
use crate::error::VerifyServiceError;

/// Keyed store enforcing single-use token consumption.
///
/// The pure validator never touches this; only the confirm flow does. The
/// implementation must be atomic (claim-once): of any number of concurrent
/// claims for the same token, exactly one returns `true`.
pub trait UsedTokenStore: Send + Sync {
    /// Claim a token for consumption. Returns `false` if it was already
    /// claimed. `ttl_secs` bounds how long the claim marker is kept — the
    /// remaining validity of the token, after which expiry rejects it anyway.
    async fn claim_once(&self, token: &str, ttl_secs: u64) -> Result<bool, VerifyServiceError>;
}

/// Repository for outbox events (verification email delivery).
pub trait OutboxRepository: Send + Sync {
    async fn record(&self, event: &OutboxEvent) -> Result<(), VerifyServiceError>;
}
