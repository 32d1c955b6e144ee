use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::{Project, ProjectPatch};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
///
/// Provided fields replace stored ones; `null` clears an optional field.
/// The merged record is validated again before it is written.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id (UUID)")),
    request_body = ProjectPatch,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<ProjectPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Project not found");
    };

    match data.project.update.execute(id, body.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(UpdateProjectError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to update project");
            ApiResponse::internal_error("Failed to update project")
        }
    }
}
