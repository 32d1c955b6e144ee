use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for DeleteProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            other => DeleteProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}
