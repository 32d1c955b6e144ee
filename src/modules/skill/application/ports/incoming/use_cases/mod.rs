mod create_skill_category;
mod delete_skill_category;
mod get_skill_category;
mod list_skill_categories;
mod update_skill_category;

pub use create_skill_category::{CreateSkillCategoryError, CreateSkillCategoryUseCase};
pub use delete_skill_category::{DeleteSkillCategoryError, DeleteSkillCategoryUseCase};
pub use get_skill_category::{GetSkillCategoryError, GetSkillCategoryUseCase};
pub use list_skill_categories::{ListSkillCategoriesError, ListSkillCategoriesUseCase};
pub use update_skill_category::{UpdateSkillCategoryError, UpdateSkillCategoryUseCase};
