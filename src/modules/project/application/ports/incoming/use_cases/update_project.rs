use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{Project, ProjectPatch};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, UpdateProjectError>;
}
