use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "salon_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub salon_id: i32,
    pub name: String,
    /// One of `OWNER`, `MANAGER`, `STAFF`.
    pub role: String,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
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
    #[sea_orm(has_many = "super::service::Entity")]
    Service,
}

impl Related<super::salon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salon.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
