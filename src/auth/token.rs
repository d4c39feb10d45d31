/// Session Token Codec
///
/// Issues and validates signed, time-bounded session tokens (JWT, HS256).
/// Tokens are stateless: nothing is stored server-side, and a token is
/// valid iff its signature verifies against the process-wide secret and
/// the supplied clock reads before its expiry. There is no revocation
/// state.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::configuration::AuthSettings;
use crate::error::{AppError, TokenError};

/// Issue a session token for `user_id`
///
/// The token embeds the subject and an expiry of `now + token_ttl_seconds`,
/// signed with the process-wide secret.
///
/// # Errors
/// Returns an error only if JWT encoding itself fails.
pub fn issue_token(
    user_id: Uuid,
    now: DateTime<Utc>,
    settings: &AuthSettings,
) -> Result<String, AppError> {
    let claims = Claims::new(user_id, now, settings.token_ttl_seconds);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token encoding failed: {}", e)))
}

/// Validate a session token and extract its subject
///
/// Verifies the signature, then checks expiry against the caller's `now`
/// rather than the system clock, so validity is a pure function of
/// (token, now, secret). A token is valid only while `now` is strictly
/// before its expiry.
///
/// The three failure kinds are kept distinct even though HTTP callers
/// collapse them all into 401.
pub fn decode_token(
    token: &str,
    now: DateTime<Utc>,
    settings: &AuthSettings,
) -> Result<Uuid, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below against the supplied clock, not the
    // library's view of the current time.
    validation.validate_exp = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        _ => TokenError::Malformed,
    })?;

    if now.timestamp() >= claims.exp {
        return Err(TokenError::Expired);
    }

    claims.user_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const TTL: i64 = 1800;

    fn test_settings() -> AuthSettings {
        AuthSettings {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            token_ttl_seconds: TTL,
            bcrypt_cost: 4,
        }
    }

    #[test]
    fn issued_token_decodes_to_its_subject() {
        let settings = test_settings();
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let token = issue_token(user_id, now, &settings).expect("Failed to issue token");
        let subject = decode_token(&token, now, &settings).expect("Failed to decode token");

        assert_eq!(subject, user_id);
    }

    #[test]
    fn token_is_valid_until_just_before_expiry() {
        let settings = test_settings();
        let user_id = Uuid::new_v4();
        let issued = Utc::now();

        let token = issue_token(user_id, issued, &settings).expect("Failed to issue token");

        let just_before = issued + Duration::seconds(TTL - 1);
        assert_eq!(decode_token(&token, just_before, &settings), Ok(user_id));
    }

    #[test]
    fn token_expires_after_ttl() {
        let settings = test_settings();
        let issued = Utc::now();

        let token =
            issue_token(Uuid::new_v4(), issued, &settings).expect("Failed to issue token");

        let just_after = issued + Duration::seconds(TTL + 1);
        assert_eq!(
            decode_token(&token, just_after, &settings),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let settings = test_settings();
        let issued = Utc::now();

        let token =
            issue_token(Uuid::new_v4(), issued, &settings).expect("Failed to issue token");

        // now == exp counts as expired
        let at_expiry = issued + Duration::seconds(TTL);
        assert_eq!(
            decode_token(&token, at_expiry, &settings),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn garbage_input_is_malformed_not_a_panic() {
        let settings = test_settings();

        for garbage in ["garbage-string", "", "a.b", "....", "Bearer abc"] {
            assert_eq!(
                decode_token(garbage, Utc::now(), &settings),
                Err(TokenError::Malformed),
                "input: {:?}",
                garbage
            );
        }
    }

    #[test]
    fn token_signed_under_different_key_fails_signature_check() {
        let settings = test_settings();
        let mut other = test_settings();
        other.secret = "a-completely-different-secret-key-value".to_string();

        let token =
            issue_token(Uuid::new_v4(), Utc::now(), &settings).expect("Failed to issue token");

        assert_eq!(
            decode_token(&token, Utc::now(), &other),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn tampered_token_is_rejected() {
        let settings = test_settings();

        let token =
            issue_token(Uuid::new_v4(), Utc::now(), &settings).expect("Failed to issue token");
        let tampered = format!("{}X", token);

        assert!(decode_token(&tampered, Utc::now(), &settings).is_err());
    }
}
