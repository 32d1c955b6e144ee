use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::Certificate;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Certificate, GetCertificateError>;
}
