use async_trait::async_trait;

use crate::modules::skill::application::domain::SkillCategory;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillCategoriesError, ListSkillCategoriesUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillCategoryRepository;
use crate::shared::listing::ListScope;

pub struct ListSkillCategoriesService<R>
where
    R: SkillCategoryRepository,
{
    repo: R,
}

impl<R> ListSkillCategoriesService<R>
where
    R: SkillCategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListSkillCategoriesUseCase for ListSkillCategoriesService<R>
where
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        scope: ListScope,
    ) -> Result<Vec<SkillCategory>, ListSkillCategoriesError> {
        Ok(self.repo.list(scope).await?)
    }
}
