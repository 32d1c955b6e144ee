use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::Icon)
                            .string_len(50)
                            .not_null()
                            .default("🔧"),
                    )
                    .col(ColumnDef::new(SkillCategories::Description).text())
                    .col(
                        ColumnDef::new(SkillCategories::Skills)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SkillCategories {
    Table,
    Id,
    Title,
    Icon,
    Description,
    Skills,
    SortOrder,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
