use serde_json::json;
use uuid::Uuid;

use crate::domain::repository::OutboxRepository;
use crate::domain::types::{OutboxEvent, TokenRecord};
use crate::error::VerifyServiceError;
use crate::usecase::codec::encode_token;

pub struct IssueVerificationInput {
    pub email: String,
}

#[derive(Debug)]
pub struct IssueVerificationOutput {
    pub token: String,
    pub expires: i64,
}

/// Mint a verification token for an email and queue the delivery email via the
/// outbox. The token itself is self-describing; nothing about it is persisted.
pub struct IssueVerificationUseCase<O: OutboxRepository> {
    pub outbox: O,
    /// Public site origin used to build the verification link.
    pub public_base_url: String,
}

impl<O: OutboxRepository> IssueVerificationUseCase<O> {
    pub async fn execute(
        &self,
        input: IssueVerificationInput,
        now_ms: i64,
    ) -> Result<IssueVerificationOutput, VerifyServiceError> {
        let record = TokenRecord::issue(input.email.clone(), now_ms);
        let token = encode_token(&record);

        let verify_url = format!(
            "{}/verify-email?token={}",
            self.public_base_url.trim_end_matches('/'),
            token
        );

        let event_id = Uuid::new_v4();
        let event = OutboxEvent {
            id: event_id,
            kind: "verification_email_requested".to_owned(),
            payload: json!({
                "email": input.email,
                "token": token,
                "verify_url": verify_url,
            }),
            idempotency_key: format!("verification_email_requested:{event_id}"),
        };
        self.outbox.record(&event).await?;

        Ok(IssueVerificationOutput {
            token,
            expires: record.expires,
        })
    }
}
