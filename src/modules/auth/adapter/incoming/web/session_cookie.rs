use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, HttpRequest};

pub const SESSION_COOKIE: &str = "session";

/// Registered as app data; absent means plain-http cookies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookieSettings {
    pub secure: bool,
}

impl SessionCookieSettings {
    pub fn from_request(req: &HttpRequest) -> Self {
        req.app_data::<web::Data<SessionCookieSettings>>()
            .map(|s| *s.get_ref())
            .unwrap_or_default()
    }
}

pub fn session_cookie(
    token: &str,
    max_age_secs: i64,
    settings: SessionCookieSettings,
) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

pub fn expired_session_cookie(settings: SessionCookieSettings) -> Cookie<'static> {
    let mut cookie = session_cookie("", 0, settings);
    cookie.make_removal();
    cookie
}
