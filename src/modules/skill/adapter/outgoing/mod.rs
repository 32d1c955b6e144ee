pub mod sea_orm_entity;
mod skill_category_repository_postgres;

pub use skill_category_repository_postgres::SkillCategoryRepositoryPostgres;
