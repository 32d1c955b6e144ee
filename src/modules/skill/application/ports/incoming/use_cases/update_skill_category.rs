use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryPatch};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillCategoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        patch: SkillCategoryPatch,
    ) -> Result<SkillCategory, UpdateSkillCategoryError>;
}
