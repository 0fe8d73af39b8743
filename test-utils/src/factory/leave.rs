//! Leave factory for creating DAY and HOURS leave records.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leave records for a salon.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::leave::LeaveFactory;
///
/// let lunch = LeaveFactory::new(&db, salon.id, date)
///     .hours(time(13, 0), time(14, 0))
///     .reason("Lunch")
///     .build()
///     .await?;
/// ```
pub struct LeaveFactory<'a> {
    db: &'a DatabaseConnection,
    salon_id: i32,
    date: NaiveDate,
    leave_type: String,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    reason: Option<String>,
}

impl<'a> LeaveFactory<'a> {
    /// Creates a new LeaveFactory for a full-day leave.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `salon_id` - Salon the leave applies to
    /// - `date` - Calendar day of the leave
    pub fn new(db: &'a DatabaseConnection, salon_id: i32, date: NaiveDate) -> Self {
        Self {
            db,
            salon_id,
            date,
            leave_type: "DAY".to_string(),
            start_time: None,
            end_time: None,
            reason: None,
        }
    }

    /// Turns the leave into an HOURS leave covering `[start, end)`.
    pub fn hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.leave_type = "HOURS".to_string();
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Builds and inserts the leave entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::leave::Model)` - Created leave entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::leave::Model, DbErr> {
        entity::leave::ActiveModel {
            id: ActiveValue::NotSet,
            salon_id: ActiveValue::Set(self.salon_id),
            date: ActiveValue::Set(self.date),
            leave_type: ActiveValue::Set(self.leave_type),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a DAY leave closing the salon for the whole date.
pub async fn create_day_leave(
    db: &DatabaseConnection,
    salon_id: i32,
    date: NaiveDate,
) -> Result<entity::leave::Model, DbErr> {
    LeaveFactory::new(db, salon_id, date).build().await
}

/// Creates an HOURS leave removing `[start, end)` from the date.
pub async fn create_hours_leave(
    db: &DatabaseConnection,
    salon_id: i32,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<entity::leave::Model, DbErr> {
    LeaveFactory::new(db, salon_id, date)
        .hours(start, end)
        .build()
        .await
}
