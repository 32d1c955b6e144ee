use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::AdminIdentity;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Current session
///
/// Returns the signed-in admin, or 401 when the token is missing or invalid.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Signed in", body = AdminIdentity),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(user: AdminUser) -> impl Responder {
    ApiResponse::success(user.0)
}
