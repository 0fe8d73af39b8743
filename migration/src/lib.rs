pub use sea_orm_migration::prelude::*;

mod m20250618_000001_create_salon_table;
mod m20250618_000002_create_salon_user_table;
mod m20250618_000003_create_service_table;
mod m20250618_000004_create_customer_table;
mod m20250618_000005_create_leave_table;
mod m20250618_000006_create_appointment_table;
mod m20250618_000007_create_appointment_service_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250618_000001_create_salon_table::Migration),
            Box::new(m20250618_000002_create_salon_user_table::Migration),
            Box::new(m20250618_000003_create_service_table::Migration),
            Box::new(m20250618_000004_create_customer_table::Migration),
            Box::new(m20250618_000005_create_leave_table::Migration),
            Box::new(m20250618_000006_create_appointment_table::Migration),
            Box::new(m20250618_000007_create_appointment_service_table::Migration),
        ]
    }
}
