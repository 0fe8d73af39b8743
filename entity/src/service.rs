use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Staff member owning the service; the salon is reached through them.
    pub salon_user_id: i32,
    pub name: String,
    pub price: f64,
    /// Duration in minutes.
    pub duration: i32,
    pub created_at: DateTimeUtc,
    /// Soft delete marker.
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::salon_user::Entity",
        from = "Column::SalonUserId",
        to = "super::salon_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SalonUser,
    #[sea_orm(has_many = "super::appointment_service::Entity")]
    AppointmentService,
}

impl Related<super::salon_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalonUser.def()
    }
}

impl Related<super::appointment_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
