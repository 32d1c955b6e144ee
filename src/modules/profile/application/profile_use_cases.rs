use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
}
