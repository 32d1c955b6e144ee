use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryInput};
use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a skill category
///
/// Skill levels must lie in 0..=100.
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = SkillCategoryInput,
    responses(
        (status = 201, description = "Skill category created", body = SkillCategory),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/skills")]
pub async fn create_skill_category_handler(
    _admin: AdminUser,
    body: web::Json<SkillCategoryInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSkillCategoryError::Validation(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }
        Err(CreateSkillCategoryError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create skill category");
            ApiResponse::internal_error("Failed to create skill category")
        }
    }
}
