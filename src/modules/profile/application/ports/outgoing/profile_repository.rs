use async_trait::async_trait;

use crate::modules::profile::application::domain::{Profile, ProfileInput};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Insert the single profile row, or overwrite it when it exists.
    async fn upsert(&self, input: ProfileInput) -> Result<Profile, ProfileRepositoryError>;
}
