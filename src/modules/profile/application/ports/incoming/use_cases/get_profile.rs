use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for GetProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        GetProfileError::RepositoryError(e.to_string())
    }
}

/// `None` until the owner saves a profile for the first time.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError>;
}
