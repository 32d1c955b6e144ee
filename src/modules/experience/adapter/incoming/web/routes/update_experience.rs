use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::{Experience, ExperiencePatch};
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update an experience entry
#[utoipa::path(
    put,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    request_body = ExperiencePatch,
    responses(
        (status = 200, description = "Updated entry", body = Experience),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<ExperiencePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Experience not found");
    };

    match data.experience.update.execute(id, body.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),
        Err(UpdateExperienceError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to update experience");
            ApiResponse::internal_error("Failed to update experience")
        }
    }
}
