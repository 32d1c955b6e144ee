use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, admin: &AdminIdentity) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: admin.id,
            email: admin.email.clone(),
            role: admin.role.clone(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != ACCESS {
            tracing::warn!(
                token_type = %decoded.claims.token_type,
                "Token type mismatch: expected access"
            );
            return Err(TokenError::InvalidTokenType(ACCESS.to_string()));
        }

        Ok(decoded.claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio-cms".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn admin() -> AdminIdentity {
        AdminIdentity {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = JwtTokenService::new(config(3600));
        let admin = admin();

        let token = service.generate_access_token(&admin).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.identity(), admin);
        assert_eq!(claims.iss, "portfolio-cms");
        assert_eq!(service.access_token_expiry(), 3600);
    }

    #[test]
    fn test_malformed_token() {
        let service = JwtTokenService::new(config(3600));
        assert_eq!(
            service.verify_token("invalid.jwt.token").unwrap_err(),
            TokenError::MalformedToken
        );
    }

    #[test]
    fn test_expired_token() {
        // Well beyond the 30s leeway.
        let service = JwtTokenService::new(config(-120));
        let token = service.generate_access_token(&admin()).unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let issuer = JwtTokenService::new(config(3600));
        let token = issuer.generate_access_token(&admin()).unwrap();

        let mut other = config(3600);
        other.secret_key = "another_secret_key_that_is_long_enough".to_string();
        let verifier = JwtTokenService::new(other);

        assert_eq!(
            verifier.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let token = JwtTokenService::new(config(3600))
            .generate_access_token(&admin())
            .unwrap();

        let mut other = config(3600);
        other.issuer = "someone-else".to_string();

        assert!(JwtTokenService::new(other).verify_token(&token).is_err());
    }
}
