use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::ProjectId).integer().not_null())
                    .col(ColumnDef::new(Devices::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Devices::Type).string_len(100).not_null())
                    .col(ColumnDef::new(Devices::Model).string_len(100))
                    .col(ColumnDef::new(Devices::Serial).string_len(100))
                    .col(ColumnDef::new(Devices::Location).text())
                    .col(ColumnDef::new(Devices::ServiceContent).text())
                    .col(
                        ColumnDef::new(Devices::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Devices::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_devices_project_id")
                            .from(Devices::Table, Devices::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_devices_project_id")
                    .table(Devices::Table)
                    .col(Devices::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
    ProjectId,
    Name,
    Type,
    Model,
    Serial,
    Location,
    ServiceContent,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
