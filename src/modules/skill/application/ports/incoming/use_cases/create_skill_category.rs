use async_trait::async_trait;

use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryInput};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillCategoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, CreateSkillCategoryError>;
}
