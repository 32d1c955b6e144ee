use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{Project, ProjectPatch};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, patch: ProjectPatch) -> Result<Project, UpdateProjectError> {
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProjectError::NotFound)?;

        let merged = patch.apply_to(&current).validate()?;

        self.repo.update(id, merged).await.map_err(|e| match e {
            // Deleted between the read and the write
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            other => UpdateProjectError::RepositoryError(other.to_string()),
        })
    }
}
