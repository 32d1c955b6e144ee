use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::incoming::use_cases::{
    DeleteExperienceError, DeleteExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError> {
        Ok(self.repo.delete(id).await?)
    }
}
