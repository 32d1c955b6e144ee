use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::listing::ListScope;

pub struct ListProjectsService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> ListProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, scope: ListScope) -> Result<Vec<Project>, ListProjectsError> {
        self.repo.list(scope).await.map_err(ListProjectsError::from)
    }
}
