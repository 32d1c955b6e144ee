mod get_session;
mod login_admin;
mod logout_admin;

pub use get_session::{__path_get_session_handler, get_session_handler};
pub use login_admin::{__path_login_admin_handler, login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout_admin::{__path_logout_admin_handler, logout_admin_handler};
