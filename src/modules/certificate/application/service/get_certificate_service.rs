use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::Certificate;
use crate::modules::certificate::application::ports::incoming::use_cases::{
    GetCertificateError, GetCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;

pub struct GetCertificateService<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> GetCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetCertificateUseCase for GetCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Certificate, GetCertificateError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetCertificateError::RepositoryError(e.to_string()))?
            .ok_or(GetCertificateError::NotFound)
    }
}
