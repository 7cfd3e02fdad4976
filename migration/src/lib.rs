pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_projects_table;
mod m20240101_000003_create_devices_table;
mod m20240101_000004_create_engineers_table;
mod m20240101_000005_create_inspections_table;
mod m20240101_000006_create_repairs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_projects_table::Migration),
            Box::new(m20240101_000003_create_devices_table::Migration),
            Box::new(m20240101_000004_create_engineers_table::Migration),
            Box::new(m20240101_000005_create_inspections_table::Migration),
            Box::new(m20240101_000006_create_repairs_table::Migration),
        ]
    }
}
