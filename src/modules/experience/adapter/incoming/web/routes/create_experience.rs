use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::{Experience, ExperienceInput};
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create an experience entry
///
/// `isCurrent: true` drops any submitted `endDate`.
#[utoipa::path(
    post,
    path = "/api/experience",
    tag = "experience",
    request_body = ExperienceInput,
    responses(
        (status = 201, description = "Entry created", body = Experience),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/experience")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    body: web::Json<ExperienceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateExperienceError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateExperienceError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create experience");
            ApiResponse::internal_error("Failed to create experience")
        }
    }
}
