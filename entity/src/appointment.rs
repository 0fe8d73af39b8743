use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub salon_id: i32,
    pub customer_id: i32,
    /// Civil date the appointment was booked for, in the salon's zone.
    pub date: Date,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    /// One of `PENDING`, `CONFIRMED`, `COMPLETED`, `CANCELLED`.
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salon::Entity",
        from = "Column::SalonId",
        to = "super::salon::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Salon,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
    #[sea_orm(has_many = "super::appointment_service::Entity")]
    AppointmentService,
}

impl Related<super::salon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salon.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::appointment_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
