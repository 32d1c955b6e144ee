use async_trait::async_trait;

use crate::modules::certificate::application::domain::Certificate;
use crate::modules::certificate::application::ports::incoming::use_cases::{
    ListCertificatesError, ListCertificatesUseCase,
};
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::shared::listing::ListScope;

pub struct ListCertificatesService<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> ListCertificatesService<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListCertificatesUseCase for ListCertificatesService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, scope: ListScope) -> Result<Vec<Certificate>, ListCertificatesError> {
        Ok(self.repo.list(scope).await?)
    }
}
