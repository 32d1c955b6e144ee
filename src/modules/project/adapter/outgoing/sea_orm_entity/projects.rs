use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    pub icon: String,

    // One of the fixed category display names
    pub category: String,

    #[sea_orm(nullable)]
    pub duration: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub problem: String,

    #[sea_orm(column_type = "Text")]
    pub solution: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,

    // Ordered string arrays stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub challenges: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub results: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(nullable)]
    pub github_url: Option<String>,

    #[sea_orm(nullable)]
    pub live_url: Option<String>,

    pub featured: bool,

    pub sort_order: i32,

    pub is_visible: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
