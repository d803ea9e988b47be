//! Reversible mapping between a [`TokenRecord`] and its opaque transport
//! string: canonical JSON text, then URL-safe base64 without padding.
//!
//! The token carries no signature — anyone who can produce the canonical text
//! can mint one. That matches the product's low-stakes confirmation-link
//! intent; tamper evidence is a deliberate non-feature here.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::domain::types::TokenRecord;

/// Decoded token fields before structural validation. Every field is optional
/// so that an incomplete payload decodes cleanly and the validator can report
/// `InvalidStructure` instead of conflating it with a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DecodedToken {
    pub email: Option<String>,
    pub timestamp: Option<i64>,
    pub expires: Option<i64>,
}

/// The transport string is not valid encoded output.
#[derive(Debug, thiserror::Error)]
#[error("token is not valid encoded data")]
pub struct DecodeError;

/// Serialize a record to canonical JSON and encode it URL-safe.
///
/// Infallible: the record is a plain string/integer triple and `json!` output
/// renders without error. The result contains only `[A-Za-z0-9_-]`.
pub fn encode_token(record: &TokenRecord) -> String {
    let canonical = serde_json::json!({
        "email": record.email,
        "timestamp": record.timestamp,
        "expires": record.expires,
    })
    .to_string();
    URL_SAFE_NO_PAD.encode(canonical)
}

/// Exact inverse of [`encode_token`]. Base64 failure, non-UTF-8 bytes, or a
/// payload that is not a JSON object all report [`DecodeError`]; missing
/// fields do not (see [`DecodedToken`]).
pub fn decode_token(token: &str) -> Result<DecodedToken, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| DecodeError)?;
    let text = String::from_utf8(bytes).map_err(|_| DecodeError)?;
    serde_json::from_str(&text).map_err(|_| DecodeError)
}
