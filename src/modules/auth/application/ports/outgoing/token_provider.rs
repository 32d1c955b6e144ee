use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims for an admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

impl TokenClaims {
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.sub,
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, admin: &AdminIdentity) -> Result<String, TokenError>;

    /// Verifies signature, issuer, expiry and that the token is an access token.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Lifetime of newly issued access tokens, in seconds.
    fn access_token_expiry(&self) -> i64;
}

/// How the token provider is shared through `app_data`.
pub type SharedTokenProvider = std::sync::Arc<dyn TokenProvider + Send + Sync>;
