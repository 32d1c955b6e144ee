use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::modules::certificate::application::ports::incoming::use_cases::ListCertificatesUseCase;
use crate::modules::experience::application::ports::incoming::use_cases::ListExperiencesUseCase;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::modules::site::application::domain::LandingData;
use crate::modules::site::application::ports::incoming::use_cases::{
    LandingError, LoadLandingUseCase,
};
use crate::modules::skill::application::ports::incoming::use_cases::ListSkillCategoriesUseCase;
use crate::shared::listing::ListScope;

/// Reads the profile and every visible collection concurrently.
pub struct LandingService {
    profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
    skills: Arc<dyn ListSkillCategoriesUseCase + Send + Sync>,
    certificates: Arc<dyn ListCertificatesUseCase + Send + Sync>,
    experiences: Arc<dyn ListExperiencesUseCase + Send + Sync>,
}

impl LandingService {
    pub fn new(
        profile: Arc<dyn GetProfileUseCase + Send + Sync>,
        projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
        skills: Arc<dyn ListSkillCategoriesUseCase + Send + Sync>,
        certificates: Arc<dyn ListCertificatesUseCase + Send + Sync>,
        experiences: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    ) -> Self {
        Self {
            profile,
            projects,
            skills,
            certificates,
            experiences,
        }
    }

    async fn load(&self) -> Result<LandingData, LandingError> {
        let scope = ListScope::VisibleOnly;

        let (profile, projects, skill_categories, certificates, experiences) = futures::join!(
            self.profile.execute(),
            self.projects.execute(scope),
            self.skills.execute(scope),
            self.certificates.execute(scope),
            self.experiences.execute(scope),
        );

        Ok(LandingData {
            profile: profile?,
            projects: projects?,
            skill_categories: skill_categories?,
            certificates: certificates?,
            experiences: experiences?,
        })
    }
}

#[async_trait]
impl LoadLandingUseCase for LandingService {
    async fn execute(&self) -> LandingData {
        match self.load().await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Landing data unavailable, rendering empty page");
                LandingData::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certificate::application::domain::entities::fixtures::certificate;
    use crate::modules::certificate::application::domain::Certificate;
    use crate::modules::certificate::application::ports::incoming::use_cases::ListCertificatesError;
    use crate::modules::experience::application::domain::Experience;
    use crate::modules::experience::application::ports::incoming::use_cases::ListExperiencesError;
    use crate::modules::profile::application::domain::entities::fixtures::profile;
    use crate::modules::profile::application::domain::Profile;
    use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
    use crate::modules::project::application::domain::entities::fixtures::project;
    use crate::modules::project::application::domain::Project;
    use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
    use crate::modules::skill::application::domain::SkillCategory;
    use crate::modules::skill::application::ports::incoming::use_cases::ListSkillCategoriesError;
    use std::sync::Mutex;

    struct FixedProfile(Option<Profile>);

    #[async_trait]
    impl GetProfileUseCase for FixedProfile {
        async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
            Ok(self.0.clone())
        }
    }

    /// Records the scope it was asked for.
    struct Projects {
        result: Result<Vec<Project>, ListProjectsError>,
        scope: Mutex<Option<ListScope>>,
    }

    #[async_trait]
    impl ListProjectsUseCase for Projects {
        async fn execute(&self, scope: ListScope) -> Result<Vec<Project>, ListProjectsError> {
            *self.scope.lock().unwrap() = Some(scope);
            self.result.clone()
        }
    }

    struct NoSkills;

    #[async_trait]
    impl ListSkillCategoriesUseCase for NoSkills {
        async fn execute(
            &self,
            _scope: ListScope,
        ) -> Result<Vec<SkillCategory>, ListSkillCategoriesError> {
            Ok(vec![])
        }
    }

    struct Certificates(Vec<Certificate>);

    #[async_trait]
    impl ListCertificatesUseCase for Certificates {
        async fn execute(
            &self,
            _scope: ListScope,
        ) -> Result<Vec<Certificate>, ListCertificatesError> {
            Ok(self.0.clone())
        }
    }

    struct NoExperience;

    #[async_trait]
    impl ListExperiencesUseCase for NoExperience {
        async fn execute(&self, _scope: ListScope) -> Result<Vec<Experience>, ListExperiencesError> {
            Ok(vec![])
        }
    }

    fn service(projects: Arc<Projects>) -> LandingService {
        LandingService::new(
            Arc::new(FixedProfile(Some(profile()))),
            projects,
            Arc::new(NoSkills),
            Arc::new(Certificates(vec![certificate()])),
            Arc::new(NoExperience),
        )
    }

    #[tokio::test]
    async fn loads_visible_records_only() {
        let projects = Arc::new(Projects {
            result: Ok(vec![project()]),
            scope: Mutex::new(None),
        });

        let data = service(projects.clone()).execute().await;

        assert!(data.profile.is_some());
        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.certificates.len(), 1);
        assert_eq!(*projects.scope.lock().unwrap(), Some(ListScope::VisibleOnly));
    }

    #[tokio::test]
    async fn any_failure_falls_back_to_empty() {
        let projects = Arc::new(Projects {
            result: Err(ListProjectsError::RepositoryError("down".to_string())),
            scope: Mutex::new(None),
        });

        let data = service(projects).execute().await;

        assert_eq!(data, LandingData::empty());
    }

    #[tokio::test]
    async fn load_names_the_failed_read() {
        let projects = Arc::new(Projects {
            result: Err(ListProjectsError::RepositoryError("down".to_string())),
            scope: Mutex::new(None),
        });

        let err = service(projects).load().await.unwrap_err();

        assert!(matches!(err, LandingError::Projects(_)));
        assert!(err.to_string().starts_with("projects: "));
    }
}
