use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::{Experience, ExperienceInput};
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Sorted by `order`, then most recent start date.
    async fn list(&self, scope: ListScope) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, ExperienceRepositoryError>;

    async fn create(&self, input: ExperienceInput) -> Result<Experience, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        input: ExperienceInput,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
