use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Repairs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Repairs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Repairs::ProjectId).integer().not_null())
                    .col(ColumnDef::new(Repairs::DeviceId).integer().not_null())
                    .col(ColumnDef::new(Repairs::EngineerId).integer())
                    .col(ColumnDef::new(Repairs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Repairs::Description).text().not_null())
                    .col(
                        ColumnDef::new(Repairs::Priority)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Repairs::Status)
                            .string_len(50)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Repairs::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Repairs::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_project_id")
                            .from(Repairs::Table, Repairs::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_device_id")
                            .from(Repairs::Table, Repairs::DeviceId)
                            .to(Devices::Table, Devices::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_engineer_id")
                            .from(Repairs::Table, Repairs::EngineerId)
                            .to(Engineers::Table, Engineers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repairs_project_id")
                    .table(Repairs::Table)
                    .col(Repairs::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repairs_status")
                    .table(Repairs::Table)
                    .col(Repairs::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Repairs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Repairs {
    Table,
    Id,
    ProjectId,
    DeviceId,
    EngineerId,
    Title,
    Description,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Engineers {
    Table,
    Id,
}
