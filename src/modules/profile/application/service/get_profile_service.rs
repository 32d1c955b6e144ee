use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repo: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
        Ok(self.repo.find().await?)
    }
}
