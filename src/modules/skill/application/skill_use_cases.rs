use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCategoryUseCase, DeleteSkillCategoryUseCase, GetSkillCategoryUseCase,
    ListSkillCategoriesUseCase, UpdateSkillCategoryUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillCategoriesUseCase + Send + Sync>,
    pub get: Arc<dyn GetSkillCategoryUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillCategoryUseCase + Send + Sync>,
}
