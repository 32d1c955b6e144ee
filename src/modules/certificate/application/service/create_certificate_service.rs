use async_trait::async_trait;

use crate::modules::certificate::application::domain::{Certificate, CertificateInput};
use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, CreateCertificateUseCase,
};
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;

pub struct CreateCertificateService<R>
where
    R: CertificateRepository,
{
    repo: R,
}

impl<R> CreateCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateCertificateUseCase for CreateCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: CertificateInput,
    ) -> Result<Certificate, CreateCertificateError> {
        let input = input.validate()?;

        self.repo
            .create(input)
            .await
            .map_err(|e| CreateCertificateError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certificate::application::domain::entities::fixtures::certificate;
    use crate::modules::certificate::application::service::mock::MockCertificateRepo;
    use serde_json::json;

    #[tokio::test]
    async fn minimal_input_is_written_with_defaults() {
        let repo = MockCertificateRepo::new(certificate());
        let service = CreateCertificateService::new(repo.clone());

        let input: CertificateInput =
            serde_json::from_value(json!({ "title": "X", "platform": "Y" })).unwrap();
        service.execute(input).await.unwrap();

        let written = repo.last_written().unwrap();
        assert_eq!(written.title, "X");
        assert_eq!(written.order, 0);
        assert!(written.is_visible);
        assert_eq!(written.color, "amber");
    }

    #[tokio::test]
    async fn blank_title_is_not_written() {
        let repo = MockCertificateRepo::new(certificate());
        let service = CreateCertificateService::new(repo.clone());

        let input: CertificateInput =
            serde_json::from_value(json!({ "title": "", "platform": "Y" })).unwrap();

        assert!(matches!(
            service.execute(input).await,
            Err(CreateCertificateError::Validation(_))
        ));
        assert!(repo.last_written().is_none());
    }
}
