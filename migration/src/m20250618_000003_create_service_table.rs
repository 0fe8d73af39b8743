use sea_orm_migration::{prelude::*, schema::*};

use super::m20250618_000002_create_salon_user_table::SalonUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(integer(Service::SalonUserId))
                    .col(string(Service::Name))
                    .col(double(Service::Price))
                    .col(integer(Service::Duration))
                    .col(
                        timestamp(Service::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Service::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_salon_user_id")
                            .from(Service::Table, Service::SalonUserId)
                            .to(SalonUser::Table, SalonUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    SalonUserId,
    Name,
    Price,
    Duration,
    CreatedAt,
    DeletedAt,
}
