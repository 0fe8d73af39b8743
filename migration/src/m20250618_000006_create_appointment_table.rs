use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250618_000001_create_salon_table::Salon, m20250618_000004_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::SalonId))
                    .col(integer(Appointment::CustomerId))
                    .col(date(Appointment::Date))
                    .col(timestamp(Appointment::StartTime))
                    .col(timestamp(Appointment::EndTime))
                    .col(string(Appointment::Status).default("PENDING"))
                    .col(text_null(Appointment::Notes))
                    .col(
                        timestamp(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_salon_id")
                            .from(Appointment::Table, Appointment::SalonId)
                            .to(Salon::Table, Salon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_customer_id")
                            .from(Appointment::Table, Appointment::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict checks and slot lookups filter on salon, date and status.
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_salon_date_status")
                    .table(Appointment::Table)
                    .col(Appointment::SalonId)
                    .col(Appointment::Date)
                    .col(Appointment::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    SalonId,
    CustomerId,
    Date,
    StartTime,
    EndTime,
    Status,
    Notes,
    CreatedAt,
}
