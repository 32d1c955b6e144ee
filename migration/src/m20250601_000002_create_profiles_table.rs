use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `singleton` is always true and unique, so the table holds one row at most.
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Profiles::Singleton)
                            .boolean()
                            .not_null()
                            .default(true)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Profiles::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Profiles::Tagline).text())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::ShortBio).text())
                    .col(ColumnDef::new(Profiles::Email).text())
                    .col(ColumnDef::new(Profiles::Phone).text())
                    .col(ColumnDef::new(Profiles::Location).text())
                    .col(ColumnDef::new(Profiles::Availability).text())
                    .col(ColumnDef::new(Profiles::AvatarUrl).text())
                    .col(ColumnDef::new(Profiles::ProfileImage).text())
                    .col(ColumnDef::new(Profiles::ResumeUrl).text())
                    .col(
                        ColumnDef::new(Profiles::SocialLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profiles::Education)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profiles::Coursework)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profiles::Strengths)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profiles::Stats)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
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
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Singleton,
    Name,
    Title,
    Tagline,
    Bio,
    ShortBio,
    Email,
    Phone,
    Location,
    Availability,
    AvatarUrl,
    ProfileImage,
    ResumeUrl,
    SocialLinks,
    Education,
    Coursework,
    Strengths,
    Stats,
    CreatedAt,
    UpdatedAt,
}
