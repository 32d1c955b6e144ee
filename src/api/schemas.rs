// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body shared by every JSON endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub error: String,

    /// Machine-readable code, present on validation and auth failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "VALIDATION_ERROR")]
    pub code: Option<String>,
}

/// Confirmation body returned by deletes and logout
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Project deleted successfully")]
    pub message: String,
}
