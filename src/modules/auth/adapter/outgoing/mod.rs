pub mod admin_user_query_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
