/// Registration and Login Routes
///
/// Registration hashes the password before the store ever sees it; login
/// verifies the credential and mints a session token on success.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, issue_token, verify_password};
use crate::configuration::AuthSettings;
use crate::error::{AppError, AuthError};
use crate::store::{NewUser, User, UserStore};
use crate::validators::{is_valid_email, is_valid_name, is_valid_password};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session token response
#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Public view of a user; never carries the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// POST /register
///
/// Register a new user with email, password, and name.
///
/// # Errors
/// - 400: invalid email format, empty/oversized password, invalid name
/// - 409: email already registered
pub async fn register(
    form: web::Json<RegisterRequest>,
    store: web::Data<dyn UserStore>,
    auth_settings: web::Data<AuthSettings>,
) -> Result<HttpResponse, AppError> {
    let email = is_valid_email(&form.email)?;
    let name = is_valid_name(&form.name)?;
    is_valid_password(&form.password)?;

    let password_hash = hash_password(&form.password, auth_settings.bcrypt_cost)?;

    let user = store.create_user(NewUser {
        email,
        name,
        password_hash,
    })?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// POST /login
///
/// Authenticate with email and password; returns a session token.
///
/// # Security Notes
/// - Unknown email and wrong password produce the identical response,
///   preventing account enumeration.
///
/// # Errors
/// - 400: invalid email format
/// - 401: invalid credentials
pub async fn login(
    form: web::Json<LoginRequest>,
    store: web::Data<dyn UserStore>,
    auth_settings: web::Data<AuthSettings>,
) -> Result<HttpResponse, AppError> {
    let email = is_valid_email(&form.email)?;

    let user = store
        .get_user_by_email(&email)
        .ok_or(AppError::Auth(AuthError::InvalidCredentials))?;

    if !verify_password(&form.password, &user.password_hash) {
        return Err(AppError::Auth(AuthError::InvalidCredentials));
    }

    let access_token = issue_token(user.id, Utc::now(), auth_settings.get_ref())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: auth_settings.token_ttl_seconds,
    }))
}
