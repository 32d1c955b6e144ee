use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// The signed-in site owner, as carried by a verified session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminIdentity {
    pub id: Uuid,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
}
