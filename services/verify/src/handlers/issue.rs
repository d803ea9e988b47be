use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Deserialize;

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::issue::{IssueVerificationInput, IssueVerificationUseCase};

#[derive(Deserialize)]
pub struct RequestVerificationRequest {
    pub email: Option<String>,
}

// ── POST /verify/request ──────────────────────────────────────────────────────

pub async fn request_verification(
    State(state): State<AppState>,
    Json(body): Json<RequestVerificationRequest>,
) -> Result<StatusCode, VerifyServiceError> {
    let email = match body.email {
        Some(email) if !email.is_empty() => email,
        _ => return Err(VerifyServiceError::MissingFields("email")),
    };

    let usecase = IssueVerificationUseCase {
        outbox: state.outbox_repo(),
        public_base_url: state.public_base_url.clone(),
    };
    usecase
        .execute(IssueVerificationInput { email }, Utc::now().timestamp_millis())
        .await?;
    Ok(StatusCode::CREATED)
}
