mod experience_repository_postgres;
pub mod sea_orm_entity;

pub use experience_repository_postgres::ExperienceRepositoryPostgres;
