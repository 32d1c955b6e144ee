pub mod auth;

pub use auth::{AdminSession, AdminUser, OptionalAdminSession, LOGIN_PATH};
