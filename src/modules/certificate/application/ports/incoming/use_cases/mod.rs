mod create_certificate;
mod delete_certificate;
mod get_certificate;
mod list_certificates;
mod update_certificate;

pub use create_certificate::{CreateCertificateError, CreateCertificateUseCase};
pub use delete_certificate::{DeleteCertificateError, DeleteCertificateUseCase};
pub use get_certificate::{GetCertificateError, GetCertificateUseCase};
pub use list_certificates::{ListCertificatesError, ListCertificatesUseCase};
pub use update_certificate::{UpdateCertificateError, UpdateCertificateUseCase};
