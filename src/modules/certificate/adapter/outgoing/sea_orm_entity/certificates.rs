use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub platform: String,

    #[sea_orm(nullable)]
    pub issue_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_id: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificate_file: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    pub color: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

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
