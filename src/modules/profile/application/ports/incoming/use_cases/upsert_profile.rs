use async_trait::async_trait;

use crate::modules::profile::application::domain::{Profile, ProfilePatch};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(&self, patch: ProfilePatch) -> Result<Profile, UpsertProfileError>;
}
