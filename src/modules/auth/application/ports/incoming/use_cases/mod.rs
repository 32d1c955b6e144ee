mod login_admin;

pub use login_admin::{
    LoginAdminUseCase, LoginError, LoginOutput, LoginRequest, LoginRequestError,
};
