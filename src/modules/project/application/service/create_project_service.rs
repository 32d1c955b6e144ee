use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectInput};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, input: ProjectInput) -> Result<Project, CreateProjectError> {
        let input = input.validate()?;

        self.project_repository
            .create(input)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}
