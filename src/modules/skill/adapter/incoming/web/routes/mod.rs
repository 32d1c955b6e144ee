mod create_skill_category;
mod delete_skill_category;
mod get_skill_category;
mod list_skill_categories;
mod update_skill_category;

pub use create_skill_category::*;
pub use delete_skill_category::*;
pub use get_skill_category::*;
pub use list_skill_categories::*;
pub use update_skill_category::*;
