use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::Project;
use crate::shared::api::ApiResponse;
use crate::shared::listing::ListScope;
use crate::AppState;

/// List projects
///
/// Every project, hidden ones included, featured first, then by `order`,
/// then newest.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = [Project]),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/projects")]
pub async fn list_projects_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute(ListScope::All).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!(error = %e, "Failed to fetch projects");
            ApiResponse::internal_error("Failed to fetch projects")
        }
    }
}
