use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginOutput, LoginRequest,
};
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::certificate::application::domain::{
    Certificate, CertificateInput, CertificatePatch,
};
use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, CreateCertificateUseCase, DeleteCertificateError,
    DeleteCertificateUseCase, GetCertificateError, GetCertificateUseCase, ListCertificatesError,
    ListCertificatesUseCase, UpdateCertificateError, UpdateCertificateUseCase,
};
use crate::modules::experience::application::domain::{
    Experience, ExperienceInput, ExperiencePatch,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, DeleteExperienceError,
    DeleteExperienceUseCase, GetExperienceError, GetExperienceUseCase, ListExperiencesError,
    ListExperiencesUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::profile::application::domain::{Profile, ProfilePatch};
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, UpsertProfileError, UpsertProfileUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::domain::{Project, ProjectInput, ProjectPatch};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectError, GetProjectUseCase, ListProjectsError, ListProjectsUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::site::application::domain::LandingData;
use crate::modules::site::application::ports::incoming::use_cases::LoadLandingUseCase;
use crate::modules::skill::application::domain::{
    SkillCategory, SkillCategoryInput, SkillCategoryPatch,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, CreateSkillCategoryUseCase, DeleteSkillCategoryError,
    DeleteSkillCategoryUseCase, GetSkillCategoryError, GetSkillCategoryUseCase,
    ListSkillCategoriesError, ListSkillCategoriesUseCase, UpdateSkillCategoryError,
    UpdateSkillCategoryUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::listing::ListScope;

const UNUSED: &str = "not used in this test";

// ──────────────────────────────────────────────────────────
// Auth / site
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Default, Clone)]
pub struct StubLoadLandingUseCase;

#[async_trait]
impl LoadLandingUseCase for StubLoadLandingUseCase {
    async fn execute(&self) -> LandingData {
        LandingData::empty()
    }
}

// ──────────────────────────────────────────────────────────
// Record collections: empty lists, nothing found, writes fail
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubProjects;

#[async_trait]
impl ListProjectsUseCase for StubProjects {
    async fn execute(&self, _scope: ListScope) -> Result<Vec<Project>, ListProjectsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetProjectUseCase for StubProjects {
    async fn execute(&self, _id: Uuid) -> Result<Project, GetProjectError> {
        Err(GetProjectError::NotFound)
    }
}

#[async_trait]
impl CreateProjectUseCase for StubProjects {
    async fn execute(&self, _input: ProjectInput) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubProjects {
    async fn execute(&self, _id: Uuid, _patch: ProjectPatch) -> Result<Project, UpdateProjectError> {
        Err(UpdateProjectError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubProjects {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::RepositoryError(UNUSED.into()))
    }
}

pub fn stub_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        list: Arc::new(StubProjects),
        get: Arc::new(StubProjects),
        create: Arc::new(StubProjects),
        update: Arc::new(StubProjects),
        delete: Arc::new(StubProjects),
    }
}

#[derive(Default, Clone)]
pub struct StubCertificates;

#[async_trait]
impl ListCertificatesUseCase for StubCertificates {
    async fn execute(&self, _scope: ListScope) -> Result<Vec<Certificate>, ListCertificatesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetCertificateUseCase for StubCertificates {
    async fn execute(&self, _id: Uuid) -> Result<Certificate, GetCertificateError> {
        Err(GetCertificateError::NotFound)
    }
}

#[async_trait]
impl CreateCertificateUseCase for StubCertificates {
    async fn execute(
        &self,
        _input: CertificateInput,
    ) -> Result<Certificate, CreateCertificateError> {
        Err(CreateCertificateError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateCertificateUseCase for StubCertificates {
    async fn execute(
        &self,
        _id: Uuid,
        _patch: CertificatePatch,
    ) -> Result<Certificate, UpdateCertificateError> {
        Err(UpdateCertificateError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteCertificateUseCase for StubCertificates {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCertificateError> {
        Err(DeleteCertificateError::RepositoryError(UNUSED.into()))
    }
}

pub fn stub_certificate_use_cases() -> CertificateUseCases {
    CertificateUseCases {
        list: Arc::new(StubCertificates),
        get: Arc::new(StubCertificates),
        create: Arc::new(StubCertificates),
        update: Arc::new(StubCertificates),
        delete: Arc::new(StubCertificates),
    }
}

#[derive(Default, Clone)]
pub struct StubExperiences;

#[async_trait]
impl ListExperiencesUseCase for StubExperiences {
    async fn execute(&self, _scope: ListScope) -> Result<Vec<Experience>, ListExperiencesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetExperienceUseCase for StubExperiences {
    async fn execute(&self, _id: Uuid) -> Result<Experience, GetExperienceError> {
        Err(GetExperienceError::NotFound)
    }
}

#[async_trait]
impl CreateExperienceUseCase for StubExperiences {
    async fn execute(&self, _input: ExperienceInput) -> Result<Experience, CreateExperienceError> {
        Err(CreateExperienceError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateExperienceUseCase for StubExperiences {
    async fn execute(
        &self,
        _id: Uuid,
        _patch: ExperiencePatch,
    ) -> Result<Experience, UpdateExperienceError> {
        Err(UpdateExperienceError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteExperienceUseCase for StubExperiences {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteExperienceError> {
        Err(DeleteExperienceError::RepositoryError(UNUSED.into()))
    }
}

pub fn stub_experience_use_cases() -> ExperienceUseCases {
    ExperienceUseCases {
        list: Arc::new(StubExperiences),
        get: Arc::new(StubExperiences),
        create: Arc::new(StubExperiences),
        update: Arc::new(StubExperiences),
        delete: Arc::new(StubExperiences),
    }
}

#[derive(Default, Clone)]
pub struct StubSkillCategories;

#[async_trait]
impl ListSkillCategoriesUseCase for StubSkillCategories {
    async fn execute(
        &self,
        _scope: ListScope,
    ) -> Result<Vec<SkillCategory>, ListSkillCategoriesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetSkillCategoryUseCase for StubSkillCategories {
    async fn execute(&self, _id: Uuid) -> Result<SkillCategory, GetSkillCategoryError> {
        Err(GetSkillCategoryError::NotFound)
    }
}

#[async_trait]
impl CreateSkillCategoryUseCase for StubSkillCategories {
    async fn execute(
        &self,
        _input: SkillCategoryInput,
    ) -> Result<SkillCategory, CreateSkillCategoryError> {
        Err(CreateSkillCategoryError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UpdateSkillCategoryUseCase for StubSkillCategories {
    async fn execute(
        &self,
        _id: Uuid,
        _patch: SkillCategoryPatch,
    ) -> Result<SkillCategory, UpdateSkillCategoryError> {
        Err(UpdateSkillCategoryError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DeleteSkillCategoryUseCase for StubSkillCategories {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteSkillCategoryError> {
        Err(DeleteSkillCategoryError::RepositoryError(UNUSED.into()))
    }
}

pub fn stub_skill_use_cases() -> SkillUseCases {
    SkillUseCases {
        list: Arc::new(StubSkillCategories),
        get: Arc::new(StubSkillCategories),
        create: Arc::new(StubSkillCategories),
        update: Arc::new(StubSkillCategories),
        delete: Arc::new(StubSkillCategories),
    }
}

#[derive(Default, Clone)]
pub struct StubProfile;

#[async_trait]
impl GetProfileUseCase for StubProfile {
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
        Ok(None)
    }
}

#[async_trait]
impl UpsertProfileUseCase for StubProfile {
    async fn execute(&self, _patch: ProfilePatch) -> Result<Profile, UpsertProfileError> {
        Err(UpsertProfileError::RepositoryError(UNUSED.into()))
    }
}

pub fn stub_profile_use_cases() -> ProfileUseCases {
    ProfileUseCases {
        get: Arc::new(StubProfile),
        upsert: Arc::new(StubProfile),
    }
}
