//! Service factory for creating test catalog entries.
//!
//! Services hang off a staff member; the salon is reached through that staff
//! member's `salon_id`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::service::ServiceFactory;
///
/// let beard = ServiceFactory::new(&db, staff.id)
///     .name("Beard trim")
///     .duration(15)
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    salon_user_id: i32,
    name: String,
    price: f64,
    duration: i32,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"` where id is auto-incremented
    /// - price: `25.0`
    /// - duration: `30` minutes
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `salon_user_id` - Staff member offering the service
    ///
    /// # Returns
    /// - `ServiceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, salon_user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            salon_user_id,
            name: format!("Service {}", id),
            price: 25.0,
            duration: 30,
            deleted_at: None,
        }
    }

    /// Sets the service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the duration in minutes.
    ///
    /// # Arguments
    /// - `duration` - Length of the service in minutes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    /// Marks the service as soft deleted at the given instant.
    pub fn deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Builds and inserts the service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::service::Model)` - Created service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            salon_user_id: ActiveValue::Set(self.salon_user_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 30 minute service with default values for the given staff member.
///
/// Shorthand for `ServiceFactory::new(db, salon_user_id).build().await`.
pub async fn create_service(
    db: &DatabaseConnection,
    salon_user_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, salon_user_id).build().await
}
