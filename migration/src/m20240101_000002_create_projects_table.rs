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
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::Client)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::ContactPerson).string_len(255))
                    .col(ColumnDef::new(Projects::ContactPhone).string_len(50))
                    .col(ColumnDef::new(Projects::StartDate).timestamp())
                    .col(
                        ColumnDef::new(Projects::Frequency)
                            .string_len(50)
                            .not_null()
                            .default("monthly"),
                    )
                    .col(ColumnDef::new(Projects::NextInspection).timestamp())
                    .col(ColumnDef::new(Projects::LastInspection).timestamp())
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string_len(50)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_name")
                    .table(Projects::Table)
                    .col(Projects::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_status")
                    .table(Projects::Table)
                    .col(Projects::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Client,
    ContactPerson,
    ContactPhone,
    StartDate,
    Frequency,
    NextInspection,
    LastInspection,
    Status,
    CreatedAt,
    UpdatedAt,
}
