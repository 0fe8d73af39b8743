use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250618_000003_create_service_table::Service,
    m20250618_000006_create_appointment_table::Appointment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentService::Table)
                    .if_not_exists()
                    .col(integer(AppointmentService::AppointmentId))
                    .col(integer(AppointmentService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(AppointmentService::AppointmentId)
                            .col(AppointmentService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_appointment_id")
                            .from(AppointmentService::Table, AppointmentService::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_service_id")
                            .from(AppointmentService::Table, AppointmentService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentService {
    Table,
    AppointmentId,
    ServiceId,
}
