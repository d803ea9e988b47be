//! Verification decision logic.
//!
//! [`verify_token`] is a pure, single-pass evaluation of `(token, email, now)`
//! with no side effects, safe to call concurrently from any number of tasks.
//! It deliberately does NOT enforce single use — validating the same unexpired
//! token twice accepts twice. Consumption is a separate concern handled by
//! [`ConfirmVerificationUseCase`] through the injected [`UsedTokenStore`].

use crate::domain::repository::UsedTokenStore;
use crate::domain::types::MS_PER_HOUR;
use crate::error::VerifyServiceError;
use crate::usecase::codec::decode_token;

pub struct VerifyTokenInput {
    pub token: String,
    pub email: String,
}

/// Outcome of an accepted verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReport {
    pub email: String,
    pub timestamp: i64,
    pub expires: i64,
    /// Milliseconds until expiry at the instant of the call.
    pub time_remaining: i64,
}

/// Evaluate a presented `(token, email)` pair at instant `now_ms`.
///
/// Check order: decode, structural completeness, email equality
/// (case-sensitive), then expiry. The expiry boundary is inclusive — a token
/// expiring exactly at `now_ms` is still valid.
pub fn verify_token(
    input: &VerifyTokenInput,
    now_ms: i64,
) -> Result<TokenReport, VerifyServiceError> {
    let decoded = decode_token(&input.token).map_err(|_| VerifyServiceError::InvalidFormat)?;

    let (email, timestamp, expires) = match (decoded.email, decoded.timestamp, decoded.expires) {
        (Some(email), Some(timestamp), Some(expires)) if !email.is_empty() => {
            (email, timestamp, expires)
        }
        _ => return Err(VerifyServiceError::InvalidStructure),
    };
    if expires <= timestamp {
        return Err(VerifyServiceError::InvalidStructure);
    }

    if email != input.email {
        return Err(VerifyServiceError::EmailMismatch);
    }

    if now_ms > expires {
        return Err(VerifyServiceError::Expired {
            hours_ago: (now_ms - expires) / MS_PER_HOUR,
        });
    }

    Ok(TokenReport {
        email,
        timestamp,
        expires,
        time_remaining: expires - now_ms,
    })
}

/// Validate and consume a token in one step: pure validation first, then an
/// atomic claim against the store. The claim marker's TTL is the token's
/// remaining validity — after that, expiry rejects the token regardless.
pub struct ConfirmVerificationUseCase<S: UsedTokenStore> {
    pub used_tokens: S,
}

impl<S: UsedTokenStore> ConfirmVerificationUseCase<S> {
    pub async fn execute(
        &self,
        input: VerifyTokenInput,
        now_ms: i64,
    ) -> Result<TokenReport, VerifyServiceError> {
        let report = verify_token(&input, now_ms)?;

        let ttl_secs = (report.time_remaining / 1000).max(1) as u64;
        let claimed = self.used_tokens.claim_once(&input.token, ttl_secs).await?;
        if !claimed {
            return Err(VerifyServiceError::AlreadyUsed);
        }

        Ok(report)
    }
}
