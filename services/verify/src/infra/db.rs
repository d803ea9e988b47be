use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

use doorstep_verify_schema::outbox_events;

use crate::domain::repository::OutboxRepository;
use crate::domain::types::OutboxEvent;
use crate::error::VerifyServiceError;

#[derive(Clone)]
pub struct DbOutboxRepository {
    pub db: DatabaseConnection,
}

impl OutboxRepository for DbOutboxRepository {
    async fn record(&self, event: &OutboxEvent) -> Result<(), VerifyServiceError> {
        let now = Utc::now();
        outbox_events::ActiveModel {
            id: Set(event.id),
            kind: Set(event.kind.clone()),
            payload: Set(event.payload.clone()),
            idempotency_key: Set(event.idempotency_key.clone()),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            next_attempt_at: Set(now),
            processed_at: Set(None),
            failed_at: Set(None),
        }
        .insert(&self.db)
        .await
        .context("record outbox event")?;
        Ok(())
    }
}
