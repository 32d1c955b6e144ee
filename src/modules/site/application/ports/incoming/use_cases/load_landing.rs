use async_trait::async_trait;

use crate::modules::certificate::application::ports::incoming::use_cases::ListCertificatesError;
use crate::modules::experience::application::ports::incoming::use_cases::ListExperiencesError;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::modules::site::application::domain::LandingData;
use crate::modules::skill::application::ports::incoming::use_cases::ListSkillCategoriesError;

/// The first read that failed while assembling the landing page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LandingError {
    #[error("profile: {0}")]
    Profile(#[from] GetProfileError),

    #[error("projects: {0}")]
    Projects(#[from] ListProjectsError),

    #[error("skills: {0}")]
    Skills(#[from] ListSkillCategoriesError),

    #[error("certificates: {0}")]
    Certificates(#[from] ListCertificatesError),

    #[error("experiences: {0}")]
    Experiences(#[from] ListExperiencesError),
}

/// Never fails: a store failure yields `LandingData::empty()`.
#[async_trait]
pub trait LoadLandingUseCase: Send + Sync {
    async fn execute(&self) -> LandingData;
}
