use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Project, GetProjectError>;
}
