use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repo.delete(id).await.map_err(DeleteProjectError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::fixtures::project;
    use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;
    use crate::modules::project::application::service::mock::MockProjectRepo;

    #[actix_web::test]
    async fn execute_success() {
        let service = DeleteProjectService::new(MockProjectRepo::new(project()));
        assert!(service.execute(Uuid::new_v4()).await.is_ok());
    }

    #[actix_web::test]
    async fn execute_not_found() {
        let mut repo = MockProjectRepo::new(project());
        repo.delete = Err(ProjectRepositoryError::NotFound);
        let service = DeleteProjectService::new(repo);

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(DeleteProjectError::NotFound)
        ));
    }

    #[actix_web::test]
    async fn execute_repository_error() {
        let mut repo = MockProjectRepo::new(project());
        repo.delete = Err(ProjectRepositoryError::DatabaseError("db down".into()));
        let service = DeleteProjectService::new(repo);

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(DeleteProjectError::RepositoryError(msg)) if msg.contains("db down")
        ));
    }
}
