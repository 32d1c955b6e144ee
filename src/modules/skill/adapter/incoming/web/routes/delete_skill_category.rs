use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a skill category permanently
#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill category id (UUID)")),
    responses(
        (status = 200, description = "Skill category deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/skills/{id}")]
pub async fn delete_skill_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Skill category not found");
    };

    match data.skill.delete.execute(id).await {
        Ok(()) => ApiResponse::message("Skill category deleted successfully"),
        Err(DeleteSkillCategoryError::NotFound) => {
            ApiResponse::not_found("Skill category not found")
        }
        Err(DeleteSkillCategoryError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to delete skill category");
            ApiResponse::internal_error("Failed to delete skill category")
        }
    }
}
