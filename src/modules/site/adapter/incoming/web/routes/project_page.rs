use actix_web::{get, http::StatusCode, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectError;
use crate::modules::site::adapter::incoming::web::render::{not_found_page, project_page};
use crate::shared::html::{html_response, html_status};
use crate::AppState;

/// Hidden projects are indistinguishable from missing ones.
#[get("/projects/{id}")]
pub async fn project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let not_found = || html_status(StatusCode::NOT_FOUND, not_found_page());

    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return not_found();
    };

    match data.project.get.execute(id).await {
        Ok(project) if project.is_visible => html_response(project_page(&project)),
        Ok(_) | Err(GetProjectError::NotFound) => not_found(),
        Err(GetProjectError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to fetch project page");
            not_found()
        }
    }
}
