use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::certificate::application::domain::Certificate;
use crate::modules::certificate::application::ports::incoming::use_cases::GetCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one certificate
#[utoipa::path(
    get,
    path = "/api/certificates/{id}",
    tag = "certificates",
    params(("id" = String, Path, description = "Certificate id (UUID)")),
    responses(
        (status = 200, description = "The certificate", body = Certificate),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/certificates/{id}")]
pub async fn get_certificate_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Certificate not found");
    };

    match data.certificate.get.execute(id).await {
        Ok(certificate) => ApiResponse::success(certificate),
        Err(GetCertificateError::NotFound) => ApiResponse::not_found("Certificate not found"),
        Err(GetCertificateError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to fetch certificate");
            ApiResponse::internal_error("Failed to fetch certificate")
        }
    }
}
