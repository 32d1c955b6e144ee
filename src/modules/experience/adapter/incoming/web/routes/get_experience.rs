use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one experience entry
#[utoipa::path(
    get,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    responses(
        (status = 200, description = "The entry", body = Experience),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/experience/{id}")]
pub async fn get_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Experience not found");
    };

    match data.experience.get.execute(id).await {
        Ok(experience) => ApiResponse::success(experience),
        Err(GetExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),
        Err(GetExperienceError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to fetch experience");
            ApiResponse::internal_error("Failed to fetch experience")
        }
    }
}
