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
                    .table(Leave::Table)
                    .if_not_exists()
                    .col(pk_auto(Leave::Id))
                    .col(integer(Leave::SalonId))
                    .col(date(Leave::Date))
                    .col(string(Leave::LeaveType))
                    .col(time_null(Leave::StartTime))
                    .col(time_null(Leave::EndTime))
                    .col(text_null(Leave::Reason))
                    .col(
                        timestamp(Leave::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_salon_id")
                            .from(Leave::Table, Leave::SalonId)
                            .to(Salon::Table, Salon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_salon_date")
                    .table(Leave::Table)
                    .col(Leave::SalonId)
                    .col(Leave::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leave {
    Table,
    Id,
    SalonId,
    Date,
    LeaveType,
    StartTime,
    EndTime,
    Reason,
    CreatedAt,
}
