use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::{Profile, ProfilePatch};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct UpsertProfileService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> UpsertProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpsertProfileUseCase for UpsertProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, patch: ProfilePatch) -> Result<Profile, UpsertProfileError> {
        let current = self
            .repo
            .find()
            .await
            .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))?;

        if current.is_none() {
            info!("Creating profile");
        }

        let merged = patch.apply_to(current.as_ref()).validate()?;

        self.repo
            .upsert(merged)
            .await
            .map_err(|e| UpsertProfileError::RepositoryError(e.to_string()))
    }
}
