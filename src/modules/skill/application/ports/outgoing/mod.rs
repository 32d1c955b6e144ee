pub mod skill_category_repository;

pub use skill_category_repository::{SkillCategoryRepository, SkillCategoryRepositoryError};
