use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::site::application::ports::incoming::use_cases::LoadLandingUseCase;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a harmless stub; tests swap in what they exercise.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    project: ProjectUseCases,
    certificate: CertificateUseCases,
    experience: ExperienceUseCases,
    skill: SkillUseCases,
    profile: ProfileUseCases,
    landing: Arc<dyn LoadLandingUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            project: stub_project_use_cases(),
            certificate: stub_certificate_use_cases(),
            experience: stub_experience_use_cases(),
            skill: stub_skill_use_cases(),
            profile: stub_profile_use_cases(),
            landing: Arc::new(StubLoadLandingUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, use_cases: ProjectUseCases) -> Self {
        self.project = use_cases;
        self
    }

    pub fn with_certificate(mut self, use_cases: CertificateUseCases) -> Self {
        self.certificate = use_cases;
        self
    }

    pub fn with_experience(mut self, use_cases: ExperienceUseCases) -> Self {
        self.experience = use_cases;
        self
    }

    pub fn with_skill(mut self, use_cases: SkillUseCases) -> Self {
        self.skill = use_cases;
        self
    }

    pub fn with_profile(mut self, use_cases: ProfileUseCases) -> Self {
        self.profile = use_cases;
        self
    }

    pub fn with_landing(mut self, uc: impl LoadLandingUseCase + Send + Sync + 'static) -> Self {
        self.landing = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin: self.login_admin,
            project: self.project,
            certificate: self.certificate,
            experience: self.experience,
            skill: self.skill,
            profile: self.profile,
            landing: self.landing,
        })
    }
}
