use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for ListProjectsError {
    fn from(err: ProjectRepositoryError) -> Self {
        ListProjectsError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, scope: ListScope) -> Result<Vec<Project>, ListProjectsError>;
}
