use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::experience::application::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::shared::listing::ListScope;
use crate::AppState;

/// List experience entries
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "All entries, by order then latest start", body = [Experience]),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/experience")]
pub async fn list_experiences_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.list.execute(ListScope::All).await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => {
            error!(error = %e, "Failed to fetch experiences");
            ApiResponse::internal_error("Failed to fetch experiences")
        }
    }
}
