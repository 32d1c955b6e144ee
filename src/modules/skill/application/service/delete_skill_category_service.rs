use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillCategoryError, DeleteSkillCategoryUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillCategoryRepository;

pub struct DeleteSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    repo: R,
}

impl<R> DeleteSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteSkillCategoryUseCase for DeleteSkillCategoryService<R>
where
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillCategoryError> {
        Ok(self.repo.delete(id).await?)
    }
}
