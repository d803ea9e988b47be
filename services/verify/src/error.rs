use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Verify service error variants.
///
/// The first five are user-recoverable rejections (request a new link or fix
/// the email) and map to 4xx with a specific message. `Internal` is the only
/// 5xx and never leaks the underlying chain to the caller.
#[derive(Debug, thiserror::Error)]
pub enum VerifyServiceError {
    #[error("Missing required fields: {0}")]
    MissingFields(&'static str),
    #[error("Invalid token format")]
    InvalidFormat,
    #[error("Invalid token structure")]
    InvalidStructure,
    #[error("Token email mismatch")]
    EmailMismatch,
    #[error("Verification link has expired")]
    Expired {
        /// Whole hours elapsed since expiry, for diagnostics.
        hours_ago: i64,
    },
    #[error("Verification link has already been used")]
    AlreadyUsed,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl VerifyServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidStructure => "INVALID_STRUCTURE",
            Self::EmailMismatch => "EMAIL_MISMATCH",
            Self::Expired { .. } => "EXPIRED",
            Self::AlreadyUsed => "ALREADY_USED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for VerifyServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFields(_)
            | Self::InvalidFormat
            | Self::InvalidStructure
            | Self::EmailMismatch
            | Self::Expired { .. } => StatusCode::BAD_REQUEST,
            Self::AlreadyUsed => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::Expired { hours_ago } => {
                tracing::debug!(hours_ago, kind = "EXPIRED", "expired verification token");
            }
            _ => {}
        }
        let body = match &self {
            Self::Expired { .. } => serde_json::json!({
                "error": self.to_string(),
                "expired": true,
            }),
            _ => serde_json::json!({
                "error": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
