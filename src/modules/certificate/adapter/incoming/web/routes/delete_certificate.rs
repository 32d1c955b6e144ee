use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::certificate::application::ports::incoming::use_cases::DeleteCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a certificate permanently
#[utoipa::path(
    delete,
    path = "/api/certificates/{id}",
    tag = "certificates",
    params(("id" = String, Path, description = "Certificate id (UUID)")),
    responses(
        (status = 200, description = "Certificate deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/certificates/{id}")]
pub async fn delete_certificate_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("Certificate not found");
    };

    match data.certificate.delete.execute(id).await {
        Ok(()) => ApiResponse::message("Certificate deleted successfully"),
        Err(DeleteCertificateError::NotFound) => ApiResponse::not_found("Certificate not found"),
        Err(DeleteCertificateError::RepositoryError(e)) => {
            error!(error = %e, %id, "Failed to delete certificate");
            ApiResponse::internal_error("Failed to delete certificate")
        }
    }
}
