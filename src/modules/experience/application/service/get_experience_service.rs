use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct GetExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> GetExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetExperienceUseCase for GetExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Experience, GetExperienceError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetExperienceError::RepositoryError(e.to_string()))?
            .ok_or(GetExperienceError::NotFound)
    }
}
