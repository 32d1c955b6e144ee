use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::ports::outgoing::CertificateRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CertificateRepositoryError> for DeleteCertificateError {
    fn from(err: CertificateRepositoryError) -> Self {
        match err {
            CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
            other => DeleteCertificateError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError>;
}
