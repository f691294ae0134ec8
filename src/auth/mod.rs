use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub mod password;

/// Tokens are valid for one hour from issuance.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Length of the "Bearer " scheme marker on presented tokens.
const BEARER_PREFIX_LEN: usize = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation error: {0}")]
    Generation(String),
}

/// Issue a signed token binding `user_id` as the subject claim.
pub fn issue(user_id: i32, secret: &str) -> Result<String, TokenError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &Claims::new(user_id), &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify a bare token string. Returns the subject user id, or `None` for
/// any signature mismatch, malformed token, or expired claim.
pub fn verify(token: &str, secret: &str) -> Option<i32> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .ok()
        .map(|data| data.claims.sub)
}

/// Verify a token as presented in an authorization header, with its
/// "Bearer " scheme marker still attached. The fixed-width marker is
/// sliced off, not parsed; values shorter than the marker fail
/// verification rather than panicking on the slice.
pub fn verify_bearer(presented: &str, secret: &str) -> Option<i32> {
    let token = presented.get(BEARER_PREFIX_LEN..)?;
    verify(token, secret)
}
