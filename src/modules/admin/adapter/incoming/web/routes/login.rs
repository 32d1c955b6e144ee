use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::{OptionalAdminSession, LOGIN_PATH};
use crate::auth::adapter::incoming::web::session_cookie::{
    expired_session_cookie, session_cookie, SessionCookieSettings,
};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::modules::admin::adapter::incoming::web::render::login_page;
use crate::shared::html::{html_response, html_status, see_other};
use crate::AppState;

const DASHBOARD_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[get("/admin/login")]
pub async fn login_page_handler(session: OptionalAdminSession) -> impl Responder {
    if session.0.is_some() {
        return see_other(DASHBOARD_PATH);
    }
    html_response(login_page("", None))
}

#[post("/admin/login")]
pub async fn login_submit_handler(
    req: HttpRequest,
    form: web::Form<LoginForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let LoginForm { email, password } = form.into_inner();

    let request = match LoginRequest::new(email.clone(), password) {
        Ok(request) => request,
        Err(e) => {
            return html_status(
                StatusCode::BAD_REQUEST,
                login_page(&email, Some(&e.to_string())),
            )
        }
    };

    info!(email = %request.email(), "Admin page login attempt");

    match data.login_admin.execute(request).await {
        Ok(out) => {
            let cookie = session_cookie(
                &out.access_token,
                out.expires_in,
                SessionCookieSettings::from_request(&req),
            );
            let mut resp = see_other(DASHBOARD_PATH);
            if let Err(e) = resp.add_cookie(&cookie) {
                error!(error = %e, "Failed to set session cookie");
                return html_status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    login_page(&email, Some("Login failed, please try again")),
                );
            }
            resp
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Admin page login rejected");
            html_status(
                StatusCode::UNAUTHORIZED,
                login_page(&email, Some("Invalid email or password")),
            )
        }
        Err(e) => {
            error!(error = %e, "Admin page login failed");
            html_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                login_page(&email, Some("Login failed, please try again")),
            )
        }
    }
}

#[post("/admin/logout")]
pub async fn logout_submit_handler(req: HttpRequest) -> impl Responder {
    info!("Admin page logout");

    let mut resp = see_other(LOGIN_PATH);
    if let Err(e) = resp.add_cookie(&expired_session_cookie(SessionCookieSettings::from_request(
        &req,
    ))) {
        error!(error = %e, "Failed to clear session cookie");
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::{LoginAdminUseCase, LoginOutput};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{session, test_admin, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogin(Result<LoginOutput, LoginError>);

    #[async_trait]
    impl LoginAdminUseCase for MockLogin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
            self.0.clone()
        }
    }

    fn granted() -> MockLogin {
        MockLogin(Ok(LoginOutput {
            access_token: "token-abc".to_string(),
            expires_in: 3600,
            admin: test_admin(),
        }))
    }

    #[actix_web::test]
    async fn test_login_page_renders_for_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(login_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin/login").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_login_page_redirects_signed_in_admin() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(login_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/login")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/admin");
    }

    #[actix_web::test]
    async fn test_login_sets_cookie_and_redirects() {
        let state = TestAppStateBuilder::default()
            .with_login_admin(granted())
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_submit_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_form(vec![("email", "admin@example.com"), ("password", "pw")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/admin");
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie");
        assert_eq!(cookie.value(), "token-abc");
    }

    #[actix_web::test]
    async fn test_wrong_password_rerenders_with_message() {
        let state = TestAppStateBuilder::default()
            .with_login_admin(MockLogin(Err(LoginError::InvalidCredentials)))
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_submit_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_form(vec![("email", "admin@example.com"), ("password", "nope")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Invalid email or password"));
        assert!(body.contains("value=\"admin@example.com\""));
    }

    #[actix_web::test]
    async fn test_malformed_email_is_400() {
        let state = TestAppStateBuilder::default()
            .with_login_admin(granted())
            .build();
        let app = test::init_service(App::new().app_data(state).service(login_submit_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_form(vec![("email", "nope"), ("password", "pw")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_logout_clears_cookie_and_redirects() {
        let app = test::init_service(App::new().service(logout_submit_handler)).await;

        let req = test::TestRequest::post().uri("/admin/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/admin/login");
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("removal cookie");
        assert_eq!(cookie.value(), "");
    }
}
