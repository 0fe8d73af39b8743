use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salon::Table)
                    .if_not_exists()
                    .col(pk_auto(Salon::Id))
                    .col(string(Salon::Name))
                    .col(time_null(Salon::OpenTime))
                    .col(time_null(Salon::CloseTime))
                    .col(string_null(Salon::Timezone))
                    .col(
                        timestamp(Salon::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Salon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Salon {
    Table,
    Id,
    Name,
    OpenTime,
    CloseTime,
    Timezone,
    CreatedAt,
}
