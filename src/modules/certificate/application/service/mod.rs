mod create_certificate_service;
mod delete_certificate_service;
mod get_certificate_service;
mod list_certificates_service;
mod update_certificate_service;

pub use create_certificate_service::CreateCertificateService;
pub use delete_certificate_service::DeleteCertificateService;
pub use get_certificate_service::GetCertificateService;
pub use list_certificates_service::ListCertificatesService;
pub use update_certificate_service::UpdateCertificateService;
