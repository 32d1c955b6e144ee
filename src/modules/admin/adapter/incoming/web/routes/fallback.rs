use actix_web::{http::StatusCode, HttpResponse};

use crate::auth::adapter::incoming::web::extractors::{OptionalAdminSession, LOGIN_PATH};
use crate::modules::admin::adapter::incoming::web::render::{message_page, Notice};
use crate::shared::html::{html_status, see_other};

/// Unmatched `/admin` paths: anonymous visitors go to the login page, signed-in
/// ones get the admin 404.
pub fn admin_not_found(session: &OptionalAdminSession) -> HttpResponse {
    match session.0 {
        None => see_other(LOGIN_PATH),
        Some(_) => html_status(
            StatusCode::NOT_FOUND,
            message_page(
                "Not found",
                "",
                &Notice::Error("Page not found".to_string()),
                "/admin",
            ),
        ),
    }
}
