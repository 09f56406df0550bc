//! Reads the expiry and subject claims out of a compact JWT.
//!
//! The signature is not checked. The server verifies tokens on every call;
//! the client only needs the claims to decide whether to skip a round trip.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{SessionClaims, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("token must have three dot-separated segments")]
    Segments,
    #[error("token payload is not valid base64url")]
    Base64,
    #[error("token payload is not valid JSON: {0}")]
    Json(String),
    #[error("token has no expiry claim")]
    MissingExpiry,
    #[error("token has no subject claim")]
    MissingSubject,
}

/// Turns a raw session token into the claims the client relies on.
pub trait TokenDecoder: Send + Sync {
    /// # Errors
    ///
    /// Returns `DecodeError` when the token is malformed or lacks a claim.
    fn decode(&self, raw: &str) -> Result<SessionClaims, DecodeError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JwtClaimsDecoder;

#[derive(Deserialize)]
struct RawClaims {
    exp: Option<f64>,
    user_id: Option<UserId>,
    sub: Option<UserId>,
}

impl TokenDecoder for JwtClaimsDecoder {
    fn decode(&self, raw: &str) -> Result<SessionClaims, DecodeError> {
        let mut segments = raw.trim().split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(DecodeError::Segments);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| DecodeError::Base64)?;
        let claims: RawClaims =
            serde_json::from_slice(&bytes).map_err(|err| DecodeError::Json(err.to_string()))?;

        let exp = claims.exp.ok_or(DecodeError::MissingExpiry)?;
        let subject = claims
            .user_id
            .or(claims.sub)
            .ok_or(DecodeError::MissingSubject)?;

        #[allow(clippy::cast_possible_truncation)]
        let expires_at_ms = (exp * 1000.0).round() as i64;
        Ok(SessionClaims::new(expires_at_ms, subject))
    }
}

/// Build an unsigned token carrying `exp` (seconds) and `user_id`.
#[cfg(any(test, feature = "test-support"))]
#[must_use]
pub fn unsigned_token(exp_secs: i64, user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({ "user_id": user_id, "exp": exp_secs });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}
