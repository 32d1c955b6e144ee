use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Projects::Icon)
                            .string_len(50)
                            .not_null()
                            .default("📊"),
                    )
                    .col(ColumnDef::new(Projects::Category).string_len(50).not_null())
                    .col(ColumnDef::new(Projects::Duration).text())
                    .col(ColumnDef::new(Projects::Problem).text().not_null())
                    .col(ColumnDef::new(Projects::Solution).text().not_null())
                    .col(ColumnDef::new(Projects::FullDescription).text())
                    .col(ColumnDef::new(Projects::TechStack).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Features).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Challenges).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Results).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Images).json_binary().not_null())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_visible_order
                ON projects (is_visible, featured DESC, sort_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_projects_visible_order;")
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Icon,
    Category,
    Duration,
    Problem,
    Solution,
    FullDescription,
    TechStack,
    Features,
    Challenges,
    Results,
    Images,
    GithubUrl,
    LiveUrl,
    Featured,
    SortOrder,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
