mod create_certificate;
mod delete_certificate;
mod get_certificate;
mod list_certificates;
mod update_certificate;

pub use create_certificate::*;
pub use delete_certificate::*;
pub use get_certificate::*;
pub use list_certificates::*;
pub use update_certificate::*;
