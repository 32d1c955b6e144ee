use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for DeleteExperienceError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => DeleteExperienceError::NotFound,
            other => DeleteExperienceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError>;
}
