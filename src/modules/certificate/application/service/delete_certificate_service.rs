use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    DeleteCertificateError, DeleteCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;

pub struct DeleteCertificateService<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> DeleteCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteCertificateUseCase for DeleteCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError> {
        Ok(self.repo.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certificate::application::domain::entities::fixtures::certificate;
    use crate::modules::certificate::application::ports::outgoing::CertificateRepositoryError;
    use crate::modules::certificate::application::service::mock::MockCertificateRepo;

    #[tokio::test]
    async fn not_found_passes_through() {
        let mut repo = MockCertificateRepo::new(certificate());
        repo.delete = Err(CertificateRepositoryError::NotFound);

        let result = DeleteCertificateService::new(repo)
            .execute(Uuid::new_v4())
            .await;
        assert!(matches!(result, Err(DeleteCertificateError::NotFound)));
    }
}
