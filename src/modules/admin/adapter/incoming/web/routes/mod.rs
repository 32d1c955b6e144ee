mod crud;
mod dashboard;
mod fallback;
mod login;
mod profile;

pub use crud::configure as configure_resource;
pub use dashboard::dashboard_handler;
pub use fallback::admin_not_found;
pub use login::{login_page_handler, login_submit_handler, logout_submit_handler};
pub use profile::{profile_page_handler, profile_submit_handler};

use actix_web::web;

use crate::modules::admin::adapter::incoming::web::resources::{
    CertificateAdmin, ExperienceAdmin, ProjectAdmin, SkillAdmin,
};

/// Every `/admin` page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page_handler)
        .service(login_submit_handler)
        .service(logout_submit_handler)
        .service(dashboard_handler)
        .service(profile_page_handler)
        .service(profile_submit_handler);

    configure_resource::<ProjectAdmin>(cfg);
    configure_resource::<SkillAdmin>(cfg);
    configure_resource::<CertificateAdmin>(cfg);
    configure_resource::<ExperienceAdmin>(cfg);
}
