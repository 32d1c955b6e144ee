use crate::api::schemas::MessageResponse;
use crate::auth::adapter::incoming::web::session_cookie::{
    expired_session_cookie, SessionCookieSettings,
};
use actix_web::{post, HttpRequest, HttpResponse, Responder};
use tracing::info;

/// Admin logout
///
/// Clears the session cookie. Tokens are stateless, so bearer clients simply
/// drop theirs.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Logged out", body = MessageResponse))
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(req: HttpRequest) -> impl Responder {
    info!("Admin logout");

    HttpResponse::Ok()
        .cookie(expired_session_cookie(SessionCookieSettings::from_request(
            &req,
        )))
        .json(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
}
