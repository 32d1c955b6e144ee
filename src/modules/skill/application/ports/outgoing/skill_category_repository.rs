use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryInput};
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCategoryRepositoryError {
    #[error("Skill category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SkillCategoryRepository: Send + Sync {
    /// Sorted by `order`, then newest first.
    async fn list(
        &self,
        scope: ListScope,
    ) -> Result<Vec<SkillCategory>, SkillCategoryRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<SkillCategory>, SkillCategoryRepositoryError>;

    async fn create(
        &self,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        input: SkillCategoryInput,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SkillCategoryRepositoryError>;
}
