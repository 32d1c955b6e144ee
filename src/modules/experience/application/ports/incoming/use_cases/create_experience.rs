use async_trait::async_trait;

use crate::modules::experience::application::domain::{Experience, ExperienceInput};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, input: ExperienceInput) -> Result<Experience, CreateExperienceError>;
}
