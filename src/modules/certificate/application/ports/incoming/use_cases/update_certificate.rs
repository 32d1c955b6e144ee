use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::{Certificate, CertificatePatch};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: CertificatePatch,
    ) -> Result<Certificate, UpdateCertificateError>;
}
