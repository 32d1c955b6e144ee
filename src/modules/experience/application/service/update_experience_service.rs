use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::{Experience, ExperiencePatch};
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, UpdateExperienceError> {
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| UpdateExperienceError::RepositoryError(e.to_string()))?
            .ok_or(UpdateExperienceError::NotFound)?;

        let merged = patch.apply_to(&current).validate()?;

        self.repo.update(id, merged).await.map_err(|e| match e {
            ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
            other => UpdateExperienceError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::domain::entities::fixtures::experience;
    use crate::modules::experience::application::service::mock::MockExperienceRepo;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn marking_current_clears_end_date_even_if_submitted() {
        let stored = experience();
        let repo = MockExperienceRepo::new(stored.clone());
        let service = UpdateExperienceService::new(repo.clone());

        let patch = ExperiencePatch {
            is_current: Some(true),
            end_date: crate::shared::patch::PatchField::Value(
                NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ),
            ..Default::default()
        };
        service.execute(stored.id, patch).await.unwrap();

        assert_eq!(repo.last_written().unwrap().end_date, None);
    }
}
