//! Salon factory for creating test salon entities.

use crate::factory::helpers::{next_id, time};
use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test salons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::salon::SalonFactory;
///
/// let salon = SalonFactory::new(&db)
///     .name("Late Night Cuts")
///     .hours(time(18, 0), time(0, 0))
///     .build()
///     .await?;
/// ```
pub struct SalonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
    timezone: Option<String>,
}

impl<'a> SalonFactory<'a> {
    /// Creates a new SalonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Salon {id}"` where id is auto-incremented
    /// - open_time: `09:00`
    /// - close_time: `18:00`
    /// - timezone: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Salon {}", id),
            open_time: Some(time(9, 0)),
            close_time: Some(time(18, 0)),
            timezone: None,
        }
    }

    /// Sets the salon name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets opening and closing time of day.
    ///
    /// # Arguments
    /// - `open` - Opening time of day
    /// - `close` - Closing time of day, `00:00` for midnight
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn hours(mut self, open: NaiveTime, close: NaiveTime) -> Self {
        self.open_time = Some(open);
        self.close_time = Some(close);
        self
    }

    /// Clears both opening and closing time to model an unconfigured salon.
    pub fn without_hours(mut self) -> Self {
        self.open_time = None;
        self.close_time = None;
        self
    }

    /// Sets the IANA timezone name of the salon.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Builds and inserts the salon entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::salon::Model)` - Created salon entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::salon::Model, DbErr> {
        entity::salon::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            open_time: ActiveValue::Set(self.open_time),
            close_time: ActiveValue::Set(self.close_time),
            timezone: ActiveValue::Set(self.timezone),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a salon open 09:00 to 18:00 with default values.
///
/// Shorthand for `SalonFactory::new(db).build().await`.
pub async fn create_salon(db: &DatabaseConnection) -> Result<entity::salon::Model, DbErr> {
    SalonFactory::new(db).build().await
}
