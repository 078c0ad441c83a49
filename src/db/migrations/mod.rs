use sea_orm_migration::{MigrationTrait, MigratorTrait, async_trait::async_trait};

mod m20260815_000001_create_users;
mod m20260815_000002_create_catalog;
mod m20260815_000003_create_exhibitions;
mod m20260815_000004_create_carts;
mod m20260815_000005_create_orders;
mod m20260815_000006_create_notifications;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_users::Migration),
            Box::new(m20260815_000002_create_catalog::Migration),
            Box::new(m20260815_000003_create_exhibitions::Migration),
            Box::new(m20260815_000004_create_carts::Migration),
            Box::new(m20260815_000005_create_orders::Migration),
            Box::new(m20260815_000006_create_notifications::Migration),
        ]
    }
}
