//! Bearer token freshness check
//!
//! Access tokens are JWT-shaped: three dot-separated segments, the middle one
//! a base64url JSON object with a numeric `exp` claim in Unix seconds. The
//! signature is never verified here; the server stays the authority on
//! validity and the client only needs to know whether it is worth sending.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// base64url with optional padding, which is what issuers emit in practice.
const PAYLOAD_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Standard alphabet, tolerated because some issuers get it wrong.
const PAYLOAD_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidToken {
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("payload is not valid base64: {0}")]
    Base64(String),

    #[error("payload is not valid UTF-8")]
    Utf8,

    #[error("payload is not a JSON object: {0}")]
    Json(String),

    #[error("payload has no numeric exp claim")]
    MissingExpiry,
}

/// Expiry claim of a decoded token, in milliseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Expiry(i64);

impl Expiry {
    /// Build an expiry from Unix seconds
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Expired iff `now` is strictly past the expiry instant.
    #[must_use]
    pub fn is_expired_at(self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.0
    }
}

/// Outcome of checking a token against the clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Fresh { expires_at: Expiry },
    Expired { expires_at: Expiry },
    Invalid(InvalidToken),
}

impl TokenStatus {
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh { .. })
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Decode the `exp` claim of a bearer token
pub fn decode_expiry(token: &str) -> Result<Expiry, InvalidToken> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(InvalidToken::SegmentCount(segments.len()));
    }

    let payload = segments[1];
    let bytes = PAYLOAD_URL_SAFE
        .decode(payload)
        .or_else(|_| PAYLOAD_STANDARD.decode(payload))
        .map_err(|e| InvalidToken::Base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| InvalidToken::Utf8)?;
    // Only an object carries claims; arrays and scalars are rejected here
    let claims: Map<String, Value> =
        serde_json::from_str(&text).map_err(|e| InvalidToken::Json(e.to_string()))?;

    let Some(Value::Number(exp)) = claims.get("exp") else {
        return Err(InvalidToken::MissingExpiry);
    };
    if let Some(secs) = exp.as_i64() {
        return Ok(Expiry::from_secs(secs));
    }
    exp.as_f64()
        .map(|secs| Expiry((secs * 1000.0) as i64))
        .ok_or(InvalidToken::MissingExpiry)
}

/// Check a bearer token against `now`
#[must_use]
pub fn check_token(token: &str, now: DateTime<Utc>) -> TokenStatus {
    match decode_expiry(token) {
        Ok(expires_at) if expires_at.is_expired_at(now) => TokenStatus::Expired { expires_at },
        Ok(expires_at) => TokenStatus::Fresh { expires_at },
        Err(reason) => TokenStatus::Invalid(reason),
    }
}

/// Boolean form of [`check_token`]; malformed tokens are reported, not panicked on.
pub fn is_token_expired(token: &str, now: DateTime<Utc>) -> Result<bool, InvalidToken> {
    decode_expiry(token).map(|expiry| expiry.is_expired_at(now))
}
