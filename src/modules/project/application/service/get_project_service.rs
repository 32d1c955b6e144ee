use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct GetProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> GetProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetProjectUseCase for GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Project, GetProjectError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetProjectError::NotFound)
    }
}
