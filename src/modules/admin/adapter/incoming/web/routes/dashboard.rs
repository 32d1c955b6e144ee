use actix_web::{get, web, Responder};
use std::fmt::Display;
use tracing::warn;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::admin::adapter::incoming::web::render::{dashboard_page, DashboardCard};
use crate::shared::html::html_response;
use crate::shared::listing::ListScope;
use crate::AppState;

fn count<T, E: Display>(kind: &'static str, result: Result<Vec<T>, E>) -> Option<usize> {
    match result {
        Ok(records) => Some(records.len()),
        Err(e) => {
            warn!(error = %e, kind, "Dashboard count unavailable");
            None
        }
    }
}

#[get("/admin")]
pub async fn dashboard_handler(_session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    let (projects, certificates, experience, skills) = futures::join!(
        data.project.list.execute(ListScope::All),
        data.certificate.list.execute(ListScope::All),
        data.experience.list.execute(ListScope::All),
        data.skill.list.execute(ListScope::All),
    );

    html_response(dashboard_page(&[
        DashboardCard {
            label: "Projects",
            href: "/admin/projects",
            count: count("projects", projects),
        },
        DashboardCard {
            label: "Certificates",
            href: "/admin/certificates",
            count: count("certificates", certificates),
        },
        DashboardCard {
            label: "Experience",
            href: "/admin/experience",
            count: count("experience", experience),
        },
        DashboardCard {
            label: "Skill Categories",
            href: "/admin/skills",
            count: count("skills", skills),
        },
    ]))
}
