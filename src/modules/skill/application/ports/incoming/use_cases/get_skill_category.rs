use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::SkillCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillCategoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SkillCategory, GetSkillCategoryError>;
}
