use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::{Experience, ExperiencePatch};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, UpdateExperienceError>;
}
