mod create_experience_service;
mod delete_experience_service;
mod get_experience_service;
mod list_experiences_service;
mod update_experience_service;

pub use create_experience_service::CreateExperienceService;
pub use delete_experience_service::DeleteExperienceService;
pub use get_experience_service::GetExperienceService;
pub use list_experiences_service::ListExperiencesService;
pub use update_experience_service::UpdateExperienceService;

#[cfg(test)]
pub(crate) mod mock {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::experience::application::domain::{Experience, ExperienceInput};
    use crate::modules::experience::application::ports::outgoing::{
        ExperienceRepository, ExperienceRepositoryError,
    };
    use crate::shared::listing::ListScope;

    #[derive(Clone)]
    pub struct MockExperienceRepo {
        pub found: Result<Option<Experience>, ExperienceRepositoryError>,
        pub write: Result<Experience, ExperienceRepositoryError>,
        pub delete: Result<(), ExperienceRepositoryError>,
        pub written: Arc<Mutex<Option<ExperienceInput>>>,
    }

    impl MockExperienceRepo {
        pub fn new(experience: Experience) -> Self {
            Self {
                found: Ok(Some(experience.clone())),
                write: Ok(experience),
                delete: Ok(()),
                written: Arc::new(Mutex::new(None)),
            }
        }

        pub fn last_written(&self) -> Option<ExperienceInput> {
            self.written.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExperienceRepository for MockExperienceRepo {
        async fn list(&self, _scope: ListScope) -> Result<Vec<Experience>, ExperienceRepositoryError> {
            Ok(self.found.clone()?.into_iter().collect())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Experience>, ExperienceRepositoryError> {
            self.found.clone()
        }

        async fn create(&self, input: ExperienceInput) -> Result<Experience, ExperienceRepositoryError> {
            *self.written.lock().unwrap() = Some(input);
            self.write.clone()
        }

        async fn update(
            &self,
            _id: Uuid,
            input: ExperienceInput,
        ) -> Result<Experience, ExperienceRepositoryError> {
            *self.written.lock().unwrap() = Some(input);
            self.write.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ExperienceRepositoryError> {
            self.delete.clone()
        }
    }
}
