use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::{SkillCategory, SkillCategoryPatch};
use crate::modules::skill::application::ports::incoming::use_cases::{
    UpdateSkillCategoryError, UpdateSkillCategoryUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillCategoryRepository, SkillCategoryRepositoryError,
};

pub struct UpdateSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    repo: R,
}

impl<R> UpdateSkillCategoryService<R>
where
    R: SkillCategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateSkillCategoryUseCase for UpdateSkillCategoryService<R>
where
    R: SkillCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        patch: SkillCategoryPatch,
    ) -> Result<SkillCategory, UpdateSkillCategoryError> {
        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| UpdateSkillCategoryError::RepositoryError(e.to_string()))?
            .ok_or(UpdateSkillCategoryError::NotFound)?;

        let merged = patch.apply_to(&current).validate()?;

        self.repo.update(id, merged).await.map_err(|e| match e {
            SkillCategoryRepositoryError::NotFound => UpdateSkillCategoryError::NotFound,
            other => UpdateSkillCategoryError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::fixtures::skill_category;
    use crate::modules::skill::application::domain::SkillEntry;
    use crate::modules::skill::application::service::mock::MockSkillCategoryRepo;

    #[tokio::test]
    async fn replaces_skill_list_wholesale() {
        let stored = skill_category();
        let repo = MockSkillCategoryRepo::new(stored.clone());
        let service = UpdateSkillCategoryService::new(repo.clone());

        let patch = SkillCategoryPatch {
            skills: Some(vec![SkillEntry {
                name: "R".into(),
                level: 60,
            }]),
            ..Default::default()
        };
        service.execute(stored.id, patch).await.unwrap();

        let written = repo.last_written().unwrap();
        assert_eq!(written.skills.len(), 1);
        assert_eq!(written.title, stored.title);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut repo = MockSkillCategoryRepo::new(skill_category());
        repo.found = Ok(None);

        let result = UpdateSkillCategoryService::new(repo)
            .execute(Uuid::new_v4(), SkillCategoryPatch::default())
            .await;
        assert!(matches!(result, Err(UpdateSkillCategoryError::NotFound)));
    }
}
