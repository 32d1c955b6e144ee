use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::SkillCategory;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one skill category
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "skills",
    params(("id" = String, Path, description = "Skill category id (UUID)")),
    responses(
        (status = 200, description = "The skill category", body = SkillCategory),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill category not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/skills/{id}")]
pub async fn get_skill_category_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Skill category not found");
    };

    match data.skill.get.execute(id).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetSkillCategoryError::NotFound) => ApiResponse::not_found("Skill category not found"),
        Err(GetSkillCategoryError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to fetch skill category");
            ApiResponse::internal_error("Failed to fetch skill category")
        }
    }
}
