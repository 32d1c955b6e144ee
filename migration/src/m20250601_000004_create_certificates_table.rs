use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certificates::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::Platform)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::IssueDate).date())
                    .col(ColumnDef::new(Certificates::CredentialId).text())
                    .col(ColumnDef::new(Certificates::CredentialUrl).text())
                    .col(ColumnDef::new(Certificates::CertificateFile).text())
                    .col(
                        ColumnDef::new(Certificates::Skills)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::Color)
                            .string_len(30)
                            .not_null()
                            .default("amber"),
                    )
                    .col(ColumnDef::new(Certificates::Description).text())
                    .col(
                        ColumnDef::new(Certificates::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certificates::IsVisible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certificates::UpdatedAt)
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
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    Title,
    Platform,
    IssueDate,
    CredentialId,
    CredentialUrl,
    CertificateFile,
    Skills,
    Color,
    Description,
    SortOrder,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
