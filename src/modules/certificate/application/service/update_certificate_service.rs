use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::{Certificate, CertificatePatch};
use crate::modules::certificate::application::ports::incoming::use_cases::{
    UpdateCertificateError, UpdateCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};

pub struct UpdateCertificateService<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> UpdateCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateCertificateUseCase for UpdateCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: CertificatePatch,
    ) -> Result<Certificate, UpdateCertificateError> {
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| UpdateCertificateError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCertificateError::NotFound)?;

        let merged = patch.apply_to(&current).validate()?;

        self.repo.update(id, merged).await.map_err(|e| match e {
            CertificateRepositoryError::NotFound => UpdateCertificateError::NotFound,
            other => UpdateCertificateError::RepositoryError(other.to_string()),
        })
    }
}
