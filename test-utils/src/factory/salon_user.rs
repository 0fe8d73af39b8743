//! Staff factory for creating test salon user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members of a salon.
pub struct SalonUserFactory<'a> {
    db: &'a DatabaseConnection,
    salon_id: i32,
    name: String,
    role: String,
}

impl<'a> SalonUserFactory<'a> {
    /// Creates a new SalonUserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Stylist {id}"` where id is auto-incremented
    /// - role: `"STAFF"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `salon_id` - Salon the staff member works at
    pub fn new(db: &'a DatabaseConnection, salon_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            salon_id,
            name: format!("Stylist {}", id),
            role: "STAFF".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role, one of `OWNER`, `MANAGER` or `STAFF`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::salon_user::Model, DbErr> {
        entity::salon_user::ActiveModel {
            id: ActiveValue::NotSet,
            salon_id: ActiveValue::Set(self.salon_id),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with default values for the given salon.
pub async fn create_salon_user(
    db: &DatabaseConnection,
    salon_id: i32,
) -> Result<entity::salon_user::Model, DbErr> {
    SalonUserFactory::new(db, salon_id).build().await
}
