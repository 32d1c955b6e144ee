use async_trait::async_trait;

use crate::modules::skill::application::domain::SkillCategory;
use crate::modules::skill::application::ports::outgoing::SkillCategoryRepositoryError;
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillCategoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillCategoryRepositoryError> for ListSkillCategoriesError {
    fn from(err: SkillCategoryRepositoryError) -> Self {
        ListSkillCategoriesError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait ListSkillCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        scope: ListScope,
    ) -> Result<Vec<SkillCategory>, ListSkillCategoriesError>;
}
