use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::verify::{
    ConfirmVerificationUseCase, TokenReport, VerifyTokenInput, verify_token,
};

/// Fields are optional so a missing one maps to the contract's 400 body
/// instead of a generic extractor rejection.
#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl VerifyEmailRequest {
    fn into_input(self) -> Result<VerifyTokenInput, VerifyServiceError> {
        match (self.token, self.email) {
            (Some(token), Some(email)) => Ok(VerifyTokenInput { token, email }),
            _ => Err(VerifyServiceError::MissingFields("token, email")),
        }
    }
}

#[derive(Serialize)]
pub struct TokenData {
    pub email: String,
    pub timestamp: i64,
    pub expires: i64,
    #[serde(rename = "timeRemaining")]
    pub time_remaining: i64,
}

#[derive(Serialize)]
pub struct VerifyEmailResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "tokenData")]
    pub token_data: TokenData,
}

impl From<TokenReport> for VerifyEmailResponse {
    fn from(report: TokenReport) -> Self {
        Self {
            success: true,
            message: "Token is valid",
            token_data: TokenData {
                email: report.email,
                timestamp: report.timestamp,
                expires: report.expires,
                time_remaining: report.time_remaining,
            },
        }
    }
}

// ── POST /verify/email ────────────────────────────────────────────────────────

/// Pure validation: no side effects, idempotent. Checking a token here does
/// not consume it.
pub async fn check_verification(
    Json(body): Json<VerifyEmailRequest>,
) -> Result<Json<VerifyEmailResponse>, VerifyServiceError> {
    let input = body.into_input()?;
    let report = verify_token(&input, Utc::now().timestamp_millis())?;
    Ok(Json(report.into()))
}

// ── POST /verify/email/confirm ────────────────────────────────────────────────

/// Validate and consume: a second confirm of the same token is rejected.
pub async fn confirm_verification(
    State(state): State<AppState>,
    Json(body): Json<VerifyEmailRequest>,
) -> Result<Json<VerifyEmailResponse>, VerifyServiceError> {
    let input = body.into_input()?;
    let usecase = ConfirmVerificationUseCase {
        used_tokens: state.used_tokens(),
    };
    let report = usecase
        .execute(input, Utc::now().timestamp_millis())
        .await?;
    Ok(Json(report.into()))
}
