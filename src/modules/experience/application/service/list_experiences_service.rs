use async_trait::async_trait;

use crate::modules::experience::application::domain::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperiencesError, ListExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::listing::ListScope;

pub struct ListExperiencesService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> ListExperiencesService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListExperiencesUseCase for ListExperiencesService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, scope: ListScope) -> Result<Vec<Experience>, ListExperiencesError> {
        Ok(self.repo.list(scope).await?)
    }
}
