use actix_web::cookie::Cookie;
use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::{SharedTokenProvider, TokenProvider};

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "portfolio-cms-test".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn test_admin() -> AdminIdentity {
    AdminIdentity {
        id: Uuid::nil(),
        email: "admin@example.com".to_string(),
        role: "admin".to_string(),
    }
}

/// Same registration the server uses, so the auth extractors can find it.
pub fn token_provider_data() -> web::Data<SharedTokenProvider> {
    let provider: SharedTokenProvider = Arc::new(jwt_service());
    web::Data::new(provider)
}

pub fn admin_token() -> String {
    jwt_service()
        .generate_access_token(&test_admin())
        .expect("token")
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}

pub fn session() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, admin_token())
}
