use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::certificate::application::domain::{Certificate, CertificatePatch};
use crate::modules::certificate::application::ports::incoming::use_cases::UpdateCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a certificate
#[utoipa::path(
    put,
    path = "/api/certificates/{id}",
    tag = "certificates",
    params(("id" = String, Path, description = "Certificate id (UUID)")),
    request_body = CertificatePatch,
    responses(
        (status = 200, description = "Updated certificate", body = Certificate),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/certificates/{id}")]
pub async fn update_certificate_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<CertificatePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Certificate not found");
    };

    match data.certificate.update.execute(id, body.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateCertificateError::NotFound) => ApiResponse::not_found("Certificate not found"),
        Err(UpdateCertificateError::Validation(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }
        Err(UpdateCertificateError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to update certificate");
            ApiResponse::internal_error("Failed to update certificate")
        }
    }
}
