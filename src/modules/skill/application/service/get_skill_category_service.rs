use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::SkillCategory;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillCategoryError, GetSkillCategoryUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillCategoryRepository;

pub struct GetSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    repo: R,
}

impl<R> GetSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetSkillCategoryUseCase for GetSkillCategoryService<R>
where
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<SkillCategory, GetSkillCategoryError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| GetSkillCategoryError::RepositoryError(e.to_string()))?
            .ok_or(GetSkillCategoryError::NotFound)
    }
}
