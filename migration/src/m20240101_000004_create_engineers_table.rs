use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Engineers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Engineers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Engineers::ProjectId).integer().not_null())
                    .col(ColumnDef::new(Engineers::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Engineers::Phone).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Engineers::Position)
                            .string_len(50)
                            .not_null()
                            .default("Engineer"),
                    )
                    .col(
                        ColumnDef::new(Engineers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Engineers::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_engineers_project_id")
                            .from(Engineers::Table, Engineers::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_engineers_project_id")
                    .table(Engineers::Table)
                    .col(Engineers::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Engineers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Engineers {
    Table,
    Id,
    ProjectId,
    Name,
    Phone,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
