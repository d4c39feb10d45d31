/// Session token claims
///
/// The payload of a session token: the authenticated subject plus the
/// standard expiry/issued-at claims (RFC 7519).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TokenError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for `user_id`, expiring `ttl_seconds` after `now`.
    pub fn new(user_id: Uuid, now: DateTime<Utc>, ttl_seconds: i64) -> Self {
        let issued_at = now.timestamp();
        Self {
            sub: user_id.to_string(),
            exp: issued_at + ttl_seconds,
            iat: issued_at,
        }
    }

    /// Extract the subject user ID.
    ///
    /// A `sub` that is not a valid UUID means the token body does not
    /// have the expected structure.
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}
