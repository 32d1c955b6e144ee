use async_trait::async_trait;

use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryInput};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, CreateSkillCategoryUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillCategoryRepository;

pub struct CreateSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    repo: R,
}

impl<R> CreateSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateSkillCategoryUseCase for CreateSkillCategoryService<R>
where
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, CreateSkillCategoryError> {
        let input = input.validate()?;

        self.repo
            .create(input)
            .await
            .map_err(|e| CreateSkillCategoryError::RepositoryError(e.to_string()))
    }
}
