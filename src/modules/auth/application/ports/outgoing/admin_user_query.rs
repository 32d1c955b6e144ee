// application/ports/outgoing/admin_user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

/// Everything login needs to know about a stored admin credential.
#[derive(Debug, Clone)]
pub struct AdminUserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminUserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminUserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str)
        -> Result<Option<AdminUserRecord>, AdminUserQueryError>;
}
