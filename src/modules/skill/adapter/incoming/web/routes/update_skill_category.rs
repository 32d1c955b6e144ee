use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryPatch};
use crate::modules::skill::application::ports::incoming::use_cases::UpdateSkillCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a skill category
#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill category id (UUID)")),
    request_body = SkillCategoryPatch,
    responses(
        (status = 200, description = "Updated skill category", body = SkillCategory),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/skills/{id}")]
pub async fn update_skill_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<SkillCategoryPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Skill category not found");
    };

    match data.skill.update.execute(id, body.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateSkillCategoryError::NotFound) => {
            ApiResponse::not_found("Skill category not found")
        }
        Err(UpdateSkillCategoryError::Validation(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }
        Err(UpdateSkillCategoryError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to update skill category");
            ApiResponse::internal_error("Failed to update skill category")
        }
    }
}
