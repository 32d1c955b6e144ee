pub mod admin_user_query;
pub mod password_hasher;
pub mod token_provider;

pub use admin_user_query::{AdminUserQuery, AdminUserQueryError, AdminUserRecord};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{SharedTokenProvider, TokenClaims, TokenError, TokenProvider};
