use async_trait::async_trait;

use crate::modules::certificate::application::domain::Certificate;
use crate::modules::certificate::application::ports::outgoing::CertificateRepositoryError;
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCertificatesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CertificateRepositoryError> for ListCertificatesError {
    fn from(err: CertificateRepositoryError) -> Self {
        ListCertificatesError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListCertificatesUseCase: Send + Sync {
    async fn execute(&self, scope: ListScope) -> Result<Vec<Certificate>, ListCertificatesError>;
}
