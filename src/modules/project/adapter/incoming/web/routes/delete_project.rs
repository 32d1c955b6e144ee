use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project permanently
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id (UUID)")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Project not found");
    };

    match data.project.delete.execute(id).await {
        Ok(()) => ApiResponse::message("Project deleted successfully"),
        Err(DeleteProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to delete project");
            ApiResponse::internal_error("Failed to delete project")
        }
    }
}
