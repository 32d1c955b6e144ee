use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::session_cookie::{session_cookie, SessionCookieSettings};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the admin client (documentation shape)
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token, also set as the HttpOnly `session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    /// Seconds until the token expires
    #[schema(example = 28800)]
    expires_in: i64,
}

/// Admin login
///
/// Checks the credential and opens a session: the token is returned in the
/// body and set as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();
    info!(email = %request.email(), "Login attempt");

    match data.login_admin.execute(request).await {
        Ok(out) => {
            let cookie = session_cookie(
                &out.access_token,
                out.expires_in,
                SessionCookieSettings::from_request(&req),
            );

            HttpResponse::Ok().cookie(cookie).json(LoginResponse {
                access_token: out.access_token,
                token_type: "Bearer".to_string(),
                expires_in: out.expires_in,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error("Login failed")
        }
    }
}
