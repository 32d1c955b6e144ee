use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::domain::{Profile, ProfilePatch};
use crate::modules::profile::application::ports::incoming::use_cases::UpsertProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create or update the profile
///
/// The first call creates the profile and must carry `name` and `title`;
/// later calls replace only the fields they provide.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "The saved profile", body = Profile),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/profile")]
pub async fn upsert_profile_handler(
    _admin: AdminUser,
    body: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.upsert.execute(body.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpsertProfileError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(UpsertProfileError::RepositoryError(e)) => {
            error!(error = %e, "Failed to update profile");
            ApiResponse::internal_error("Failed to update profile")
        }
    }
}
