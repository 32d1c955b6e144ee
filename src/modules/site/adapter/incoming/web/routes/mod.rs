mod get_portfolio;
mod landing_page;
mod project_page;

pub use get_portfolio::*;
pub use landing_page::*;
pub use project_page::*;
