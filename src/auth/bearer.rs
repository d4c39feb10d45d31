/// Authorization header parsing
///
/// Strict parser for `Bearer <token>` credentials. Anything that is not
/// exactly the scheme, one space, and a non-empty token is rejected with
/// a typed error before the token codec is ever consulted.

use crate::error::AuthError;

/// Extract the bearer token from an `Authorization` header value.
///
/// `header` is the raw header value, or `None` if the request carried no
/// `Authorization` header at all.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingAuthHeader)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedAuthHeader)?;

    // No empty token, no extra whitespace smuggled into the credential.
    if token.is_empty() || token.contains(' ') {
        return Err(AuthError::MalformedAuthHeader);
    }

    Ok(token)
}
