use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an experience entry permanently
#[utoipa::path(
    delete,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = String, Path, description = "Experience id (UUID)")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Experience not found");
    };

    match data.experience.delete.execute(id).await {
        Ok(()) => ApiResponse::message("Experience deleted successfully"),
        Err(DeleteExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),
        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to delete experience");
            ApiResponse::internal_error("Failed to delete experience")
        }
    }
}
