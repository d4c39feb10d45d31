/// Profile Routes
///
/// Read and update a user profile. Both routes sit behind the
/// authentication middleware, which has already validated the session
/// token and injected the subject; the handlers only need to check that
/// the subject matches the requested profile.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AuthError, StoreError};
use crate::middleware::AuthenticatedUser;
use crate::routes::auth::UserResponse;
use crate::store::{UserStore, UserUpdate};
use crate::validators::{is_valid_email, is_valid_name};

/// Partial profile update request; omitted fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// GET /profile/{id}
///
/// # Errors
/// - 401: token subject does not match `{id}`
/// - 404: no such user
pub async fn get_profile(
    path: web::Path<Uuid>,
    subject: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if subject.0 != id {
        return Err(AppError::Auth(AuthError::SubjectMismatch));
    }

    let user = store.get_user(id).ok_or(StoreError::NotFound)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// PUT /profile/{id}
///
/// Updated fields go through the same validation as registration input.
///
/// # Errors
/// - 400: invalid email or name
/// - 401: token subject does not match `{id}`
/// - 404: no such user
/// - 409: new email already belongs to another user
pub async fn update_profile(
    path: web::Path<Uuid>,
    form: web::Json<UpdateProfileRequest>,
    subject: web::ReqData<AuthenticatedUser>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if subject.0 != id {
        return Err(AppError::Auth(AuthError::SubjectMismatch));
    }

    let update = UserUpdate {
        email: form.email.as_deref().map(is_valid_email).transpose()?,
        name: form.name.as_deref().map(is_valid_name).transpose()?,
    };

    let user = store.update_user(id, update)?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}
