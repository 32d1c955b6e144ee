use std::sync::Arc;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateUseCase, DeleteCertificateUseCase, GetCertificateUseCase,
    ListCertificatesUseCase, UpdateCertificateUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub list: Arc<dyn ListCertificatesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCertificateUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCertificateUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCertificateUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCertificateUseCase + Send + Sync>,
}
