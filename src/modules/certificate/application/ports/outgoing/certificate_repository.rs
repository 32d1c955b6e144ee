use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::{Certificate, CertificateInput};
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Sorted by `order`, then newest first.
    async fn list(&self, scope: ListScope) -> Result<Vec<Certificate>, CertificateRepositoryError>;

    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<Certificate>, CertificateRepositoryError>;

    async fn create(&self, input: CertificateInput)
        -> Result<Certificate, CertificateRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        input: CertificateInput,
    ) -> Result<Certificate, CertificateRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
