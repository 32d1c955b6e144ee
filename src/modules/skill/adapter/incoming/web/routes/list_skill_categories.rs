use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::SkillCategory;
use crate::shared::api::ApiResponse;
use crate::shared::listing::ListScope;
use crate::AppState;

/// List skill categories
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "All skill categories", body = [SkillCategory]),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/skills")]
pub async fn list_skill_categories_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.list.execute(ListScope::All).await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => {
            error!(error = %e, "Failed to fetch skills");
            ApiResponse::internal_error("Failed to fetch skills")
        }
    }
}
