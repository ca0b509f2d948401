pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_plan_table;
mod m20260301_000002_create_customer_table;
mod m20260301_000003_create_customer_address_table;
mod m20260301_000004_create_tray_config_table;
mod m20260301_000005_create_email_registration_table;
mod m20260301_000006_create_user_link_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_plan_table::Migration),
            Box::new(m20260301_000002_create_customer_table::Migration),
            Box::new(m20260301_000003_create_customer_address_table::Migration),
            Box::new(m20260301_000004_create_tray_config_table::Migration),
            Box::new(m20260301_000005_create_email_registration_table::Migration),
            Box::new(m20260301_000006_create_user_link_table::Migration),
        ]
    }
}
