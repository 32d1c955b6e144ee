use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{Project, ProjectInput};
use crate::shared::listing::ListScope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Persistence for projects. Inputs arrive already validated.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Sorted featured first, then `order` ascending, then newest first.
    async fn list(&self, scope: ListScope) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn create(&self, input: ProjectInput) -> Result<Project, ProjectRepositoryError>;

    async fn update(&self, id: Uuid, input: ProjectInput)
        -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
