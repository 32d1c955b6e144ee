use async_trait::async_trait;

use crate::modules::experience::application::domain::{Experience, ExperienceInput};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, input: ExperienceInput) -> Result<Experience, CreateExperienceError> {
        let input = input.validate()?;

        self.repo
            .create(input)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}
