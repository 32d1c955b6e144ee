pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::auth;
pub use modules::certificate;
pub use modules::experience;
pub use modules::profile;
pub use modules::project;
pub use modules::site;
pub use modules::skill;

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::extractors::OptionalAdminSession;
use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::html::html_status;
use crate::site::application::ports::incoming::use_cases::LoadLandingUseCase;
use crate::skill::application::skill_use_cases::SkillUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub certificate: CertificateUseCases,
    pub experience: ExperienceUseCases,
    pub skill: SkillUseCases,
    pub profile: ProfileUseCases,
    pub landing: Arc<dyn LoadLandingUseCase + Send + Sync>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upsert_profile_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Certificates
    cfg.service(crate::certificate::adapter::incoming::web::routes::list_certificates_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::get_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::certificate::adapter::incoming::web::routes::delete_certificate_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::list_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::list_skill_categories_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skill_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_category_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_category_handler);
    // Public site
    cfg.service(crate::site::adapter::incoming::web::routes::landing_page_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::project_page_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_portfolio_handler);
    // Admin panel
    crate::admin::adapter::incoming::web::routes::configure(cfg);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    cfg.default_service(web::to(not_found_handler));
}

/// Anything no route matched, answered in the dialect of its area.
async fn not_found_handler(req: HttpRequest, session: OptionalAdminSession) -> HttpResponse {
    let path = req.path();

    if path == "/admin" || path.starts_with("/admin/") {
        crate::admin::adapter::incoming::web::routes::admin_not_found(&session)
    } else if path.starts_with("/api/") {
        ApiResponse::not_found("Not found")
    } else {
        html_status(
            StatusCode::NOT_FOUND,
            crate::site::adapter::incoming::web::render::not_found_page(),
        )
    }
}
