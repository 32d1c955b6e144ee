use async_trait::async_trait;

use crate::modules::certificate::application::domain::{Certificate, CertificateInput};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCertificateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCertificateUseCase: Send + Sync {
    async fn execute(&self, input: CertificateInput)
        -> Result<Certificate, CreateCertificateError>;
}
