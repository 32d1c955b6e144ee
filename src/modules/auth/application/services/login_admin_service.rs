use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminIdentity;
use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LoginError, LoginOutput, LoginRequest,
};
use crate::auth::application::ports::outgoing::{AdminUserQuery, PasswordHasher, TokenProvider};

pub struct LoginAdminService<Q>
where
    Q: AdminUserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginAdminService<Q>
where
    Q: AdminUserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: AdminUserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or_else(|| {
                warn!(email = %request.email(), "Login failed: unknown email");
                LoginError::InvalidCredentials
            })?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(email = %request.email(), "Login failed: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let admin = AdminIdentity {
            id: user.id,
            email: user.email,
            role: user.role,
        };

        let access_token = self
            .token_provider
            .generate_access_token(&admin)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(admin_id = %admin.id, "Admin logged in");

        Ok(LoginOutput {
            access_token,
            expires_in: self.token_provider.access_token_expiry(),
            admin,
        })
    }
}
