use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::SkillCategoryRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillCategoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillCategoryRepositoryError> for DeleteSkillCategoryError {
    fn from(err: SkillCategoryRepositoryError) -> Self {
        match err {
            SkillCategoryRepositoryError::NotFound => DeleteSkillCategoryError::NotFound,
            other => DeleteSkillCategoryError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillCategoryError>;
}
