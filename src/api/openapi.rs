use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::auth::application::domain::entities::AdminIdentity;
use crate::modules::certificate::application::domain::{
    Certificate, CertificateInput, CertificatePatch,
};
use crate::modules::experience::application::domain::{
    Experience, ExperienceInput, ExperiencePatch,
};
use crate::modules::profile::application::domain::{
    Education, Profile, ProfileInput, ProfilePatch, ProfileStats, SocialLinks,
};
use crate::modules::project::application::domain::{
    Project, ProjectCategory, ProjectInput, ProjectPatch,
};
use crate::modules::site::application::domain::LandingData;
use crate::modules::skill::application::domain::{
    SkillCategory, SkillCategoryInput, SkillCategoryPatch, SkillEntry,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "JSON API behind the portfolio site and its admin panel",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,

        // Public landing data
        crate::modules::site::adapter::incoming::web::routes::get_portfolio_handler,

        // Profile endpoints
        crate::modules::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::upsert_profile_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Certificate endpoints
        crate::modules::certificate::adapter::incoming::web::routes::list_certificates_handler,
        crate::modules::certificate::adapter::incoming::web::routes::create_certificate_handler,
        crate::modules::certificate::adapter::incoming::web::routes::get_certificate_handler,
        crate::modules::certificate::adapter::incoming::web::routes::update_certificate_handler,
        crate::modules::certificate::adapter::incoming::web::routes::delete_certificate_handler,

        // Experience endpoints
        crate::modules::experience::adapter::incoming::web::routes::list_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Skill category endpoints
        crate::modules::skill::adapter::incoming::web::routes::list_skill_categories_handler,
        crate::modules::skill::adapter::incoming::web::routes::create_skill_category_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_skill_category_handler,
        crate::modules::skill::adapter::incoming::web::routes::update_skill_category_handler,
        crate::modules::skill::adapter::incoming::web::routes::delete_skill_category_handler,
    ),
    components(
        schemas(
            // Shared bodies
            ErrorResponse,
            MessageResponse,

            // Auth
            LoginRequestDto,
            LoginResponse,
            AdminIdentity,

            // Records
            Profile,
            ProfileInput,
            ProfilePatch,
            ProfileStats,
            SocialLinks,
            Education,
            Project,
            ProjectCategory,
            ProjectInput,
            ProjectPatch,
            Certificate,
            CertificateInput,
            CertificatePatch,
            Experience,
            ExperienceInput,
            ExperiencePatch,
            SkillCategory,
            SkillCategoryInput,
            SkillCategoryPatch,
            SkillEntry,
            LandingData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "site", description = "Public landing data"),
        (name = "profile", description = "Site owner profile"),
        (name = "projects", description = "Project management endpoints"),
        (name = "certificates", description = "Certificate management endpoints"),
        (name = "experience", description = "Work experience endpoints"),
        (name = "skills", description = "Skill category endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_collection_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/auth/login",
            "/api/auth/session",
            "/api/portfolio",
            "/api/profile",
            "/api/projects",
            "/api/projects/{id}",
            "/api/certificates/{id}",
            "/api/experience/{id}",
            "/api/skills/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
