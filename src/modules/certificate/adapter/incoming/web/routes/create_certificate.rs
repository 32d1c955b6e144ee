use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::certificate::application::domain::{Certificate, CertificateInput};
use crate::modules::certificate::application::ports::incoming::use_cases::CreateCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a certificate
#[utoipa::path(
    post,
    path = "/api/certificates",
    tag = "certificates",
    request_body = CertificateInput,
    responses(
        (status = 201, description = "Certificate created", body = Certificate),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/certificates")]
pub async fn create_certificate_handler(
    _admin: AdminUser,
    body: web::Json<CertificateInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificate.create.execute(body.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateCertificateError::Validation(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }
        Err(CreateCertificateError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create certificate");
            ApiResponse::internal_error("Failed to create certificate")
        }
    }
}
