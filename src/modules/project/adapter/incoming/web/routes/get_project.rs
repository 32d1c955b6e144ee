use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one project
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id (UUID)")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Project not found");
    };

    match data.project.get.execute(id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(GetProjectError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to fetch project");
            ApiResponse::internal_error("Failed to fetch project")
        }
    }
}
