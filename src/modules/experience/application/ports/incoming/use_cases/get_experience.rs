use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Experience, GetExperienceError>;
}
