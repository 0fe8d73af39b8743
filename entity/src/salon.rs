use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "salon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Opening time of day, re-based onto the queried date.
    pub open_time: Option<Time>,
    /// Closing time of day; 00:00 means midnight at the end of the day.
    pub close_time: Option<Time>,
    /// IANA zone name, falls back to the configured default when unset.
    pub timezone: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::salon_user::Entity")]
    SalonUser,
    #[sea_orm(has_many = "super::leave::Entity")]
    Leave,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::salon_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalonUser.def()
    }
}

impl Related<super::leave::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leave.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
