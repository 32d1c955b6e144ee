use async_trait::async_trait;

use crate::modules::experience::application::domain::Experience;
use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExperiencesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for ListExperiencesError {
    fn from(err: ExperienceRepositoryError) -> Self {
        ListExperiencesError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self, scope: ListScope) -> Result<Vec<Experience>, ListExperiencesError>;
}
