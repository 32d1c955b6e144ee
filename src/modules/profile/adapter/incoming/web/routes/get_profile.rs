use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the profile
///
/// Returns `null` until the profile has been saved once.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The profile, or null", body = Option<Profile>),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/profile")]
pub async fn get_profile_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => {
            error!(error = %e, "Failed to fetch profile");
            ApiResponse::internal_error("Failed to fetch profile")
        }
    }
}
