/// Bearer Authentication Middleware
///
/// Extracts the bearer token from the Authorization header, validates it
/// with the token codec, and injects the authenticated subject into
/// request extensions for route handlers.
///
/// A missing or malformed header short-circuits without consulting the
/// codec at all. Every failure kind - missing header, malformed header,
/// malformed token, bad signature, expired token - renders the same
/// uniform 401 body.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use chrono::Utc;
use futures::future::LocalBoxFuture;
use std::rc::Rc;
use uuid::Uuid;

use crate::auth::{decode_token, parse_bearer};
use crate::configuration::AuthSettings;
use crate::error::AuthError;

/// The subject identity established by a validated session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Uuid);

/// Authentication middleware for protecting routes
///
/// Must be applied to routes that require a valid session token.
pub struct AuthMiddleware {
    auth_settings: AuthSettings,
}

impl AuthMiddleware {
    pub fn new(auth_settings: AuthSettings) -> Self {
        Self { auth_settings }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            auth_settings: self.auth_settings.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    auth_settings: AuthSettings,
}

impl<S> AuthMiddlewareService<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<AuthenticatedUser, AuthError> {
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok());

        let token = parse_bearer(header)?;
        let user_id = decode_token(token, Utc::now(), &self.auth_settings)
            .map_err(AuthError::Token)?;

        Ok(AuthenticatedUser(user_id))
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authenticate(&req) {
            Ok(subject) => {
                req.extensions_mut().insert(subject);

                tracing::debug!(user_id = %subject.0, "Session token validated");

                let service = self.service.clone();
                Box::pin(async move { service.call(req).await })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Request authentication failed");
                let response = HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "Unauthorized",
                    "code": "UNAUTHORIZED"
                }));
                Box::pin(async move {
                    Err(actix_web::error::InternalError::from_response(
                        "Unauthorized",
                        response,
                    )
                    .into())
                })
            }
        }
    }
}
