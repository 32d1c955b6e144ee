mod get_profile_service;
mod upsert_profile_service;

pub use get_profile_service::GetProfileService;
pub use upsert_profile_service::UpsertProfileService;

#[cfg(test)]
pub(crate) mod mock {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::modules::profile::application::domain::{Profile, ProfileInput};
    use crate::modules::profile::application::ports::outgoing::{
        ProfileRepository, ProfileRepositoryError,
    };

    #[derive(Clone)]
    pub struct MockProfileRepo {
        pub found: Result<Option<Profile>, ProfileRepositoryError>,
        pub write: Result<Profile, ProfileRepositoryError>,
        pub written: Arc<Mutex<Option<ProfileInput>>>,
    }

    impl MockProfileRepo {
        pub fn new(stored: Option<Profile>, returned: Profile) -> Self {
            Self {
                found: Ok(stored),
                write: Ok(returned),
                written: Arc::new(Mutex::new(None)),
            }
        }

        pub fn last_written(&self) -> Option<ProfileInput> {
            self.written.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepo {
        async fn find(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
            self.found.clone()
        }

        async fn upsert(&self, input: ProfileInput) -> Result<Profile, ProfileRepositoryError> {
            *self.written.lock().unwrap() = Some(input);
            self.write.clone()
        }
    }
}
