use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperienceUseCase,
    ListExperiencesUseCase, UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    pub get: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
