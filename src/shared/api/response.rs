// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::api::schemas::{ErrorResponse, MessageResponse};

/// Response helpers for the JSON API.
///
/// Records are returned verbatim; failures carry `{ "error": <message> }`,
/// plus a machine-readable `code` where the client can act on it.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageResponse {
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, code: Option<&str>, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResponse {
            error: message.to_string(),
            code: code.map(str::to_string),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, None, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, Some(code), message)
    }

    pub fn validation_error(message: &str) -> HttpResponse {
        Self::bad_request("VALIDATION_ERROR", message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, Some(code), message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, None, message)
    }
}
