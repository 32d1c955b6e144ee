use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::certificate::application::domain::Certificate;
use crate::shared::api::ApiResponse;
use crate::shared::listing::ListScope;
use crate::AppState;

/// List certificates
#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = "certificates",
    responses(
        (status = 200, description = "All certificates, by order then newest", body = [Certificate]),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/certificates")]
pub async fn list_certificates_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificate.list.execute(ListScope::All).await {
        Ok(certificates) => ApiResponse::success(certificates),
        Err(e) => {
            error!(error = %e, "Failed to fetch certificates");
            ApiResponse::internal_error("Failed to fetch certificates")
        }
    }
}
