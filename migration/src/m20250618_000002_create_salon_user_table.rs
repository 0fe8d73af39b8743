use sea_orm_migration::{prelude::*, schema::*};

use super::m20250618_000001_create_salon_table::Salon;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalonUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SalonUser::Id))
                    .col(integer(SalonUser::SalonId))
                    .col(string(SalonUser::Name))
                    .col(string(SalonUser::Role))
                    .col(
                        timestamp(SalonUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(SalonUser::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salon_user_salon_id")
                            .from(SalonUser::Table, SalonUser::SalonId)
                            .to(Salon::Table, Salon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalonUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SalonUser {
    Table,
    Id,
    SalonId,
    Name,
    Role,
    CreatedAt,
    DeletedAt,
}
