use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::{Project, ProjectInput};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectInput,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    body: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create project");
            ApiResponse::internal_error("Failed to create project")
        }
    }
}
