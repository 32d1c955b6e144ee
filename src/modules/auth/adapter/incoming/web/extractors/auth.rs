use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::SharedTokenProvider;
use crate::shared::api::ApiResponse;
use crate::shared::html::see_other;

pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthFailure {
    ProviderMissing,
    MissingToken,
    InvalidToken,
}

fn create_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Bearer header first, then the session cookie.
fn extract_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    })
}

fn resolve_identity(req: &HttpRequest) -> Result<AdminIdentity, AuthFailure> {
    let provider = req
        .app_data::<web::Data<SharedTokenProvider>>()
        .ok_or(AuthFailure::ProviderMissing)?;

    let token = extract_token(req).ok_or(AuthFailure::MissingToken)?;

    provider
        .verify_token(&token)
        .map(|claims| claims.identity())
        .map_err(|_| AuthFailure::InvalidToken)
}

//
// ──────────────────────────────────────────────────────────
// JSON API: 401 on failure
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminIdentity);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = resolve_identity(req).map(AdminUser).map_err(|failure| {
            create_error(match failure {
                AuthFailure::ProviderMissing => {
                    tracing::error!("Token provider is not registered as app data");
                    ApiResponse::internal_error("Authentication unavailable")
                }
                AuthFailure::MissingToken => {
                    ApiResponse::unauthorized("MISSING_AUTH", "Authentication required")
                }
                AuthFailure::InvalidToken => {
                    ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
                }
            })
        });

        ready(result)
    }
}

//
// ──────────────────────────────────────────────────────────
// HTML admin pages: 303 to the login page on failure
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AdminSession(pub AdminIdentity);

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            resolve_identity(req)
                .map(AdminSession)
                .map_err(|_| create_error(see_other(LOGIN_PATH))),
        )
    }
}

/// Never fails; used where anonymous and signed-in visitors are routed
/// differently (the login page and the `/admin` fallback).
#[derive(Debug, Clone)]
pub struct OptionalAdminSession(pub Option<AdminIdentity>);

impl FromRequest for OptionalAdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalAdminSession(resolve_identity(req).ok())))
    }
}
