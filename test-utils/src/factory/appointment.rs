//! Appointment factory for creating booked appointments.
//!
//! Inserts bypass admission control entirely. Use it to arrange existing
//! bookings before exercising the availability engine or the booking service.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, salon.id, customer.id)
///     .window(start, start + Duration::minutes(30))
///     .services(vec![service.id])
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    salon_id: i32,
    customer_id: i32,
    date: Option<NaiveDate>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    notes: Option<String>,
    service_ids: Vec<i32>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - start_time: 1 day from now, end_time 30 minutes later
    /// - date: the UTC calendar date of start_time
    /// - status: `"PENDING"`
    /// - service_ids: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `salon_id` - Salon timeline the appointment occupies
    /// - `customer_id` - Customer who booked it
    pub fn new(db: &'a DatabaseConnection, salon_id: i32, customer_id: i32) -> Self {
        let start_time = Utc::now() + Duration::days(1);
        Self {
            db,
            salon_id,
            customer_id,
            date: None,
            start_time,
            end_time: start_time + Duration::minutes(30),
            status: "PENDING".to_string(),
            notes: None,
            service_ids: Vec::new(),
        }
    }

    /// Sets start and end instants of the appointment.
    ///
    /// # Arguments
    /// - `start` - Start instant
    /// - `end` - End instant
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    /// Overrides the booked calendar date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the services linked through `appointment_service`.
    pub fn services(mut self, service_ids: Vec<i32>) -> Self {
        self.service_ids = service_ids;
        self
    }

    /// Builds and inserts the appointment and its service associations.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let date = self
            .date
            .unwrap_or_else(|| self.start_time.date_naive());

        let appointment = entity::appointment::ActiveModel {
            id: ActiveValue::NotSet,
            salon_id: ActiveValue::Set(self.salon_id),
            customer_id: ActiveValue::Set(self.customer_id),
            date: ActiveValue::Set(date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for service_id in self.service_ids {
            entity::appointment_service::ActiveModel {
                appointment_id: ActiveValue::Set(appointment.id),
                service_id: ActiveValue::Set(service_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(appointment)
    }
}

/// Creates a PENDING appointment occupying `[start, end)`.
///
/// # Arguments
/// - `db` - Database connection
/// - `salon_id` - Salon timeline the appointment occupies
/// - `customer_id` - Customer who booked it
/// - `start` - Start instant
/// - `end` - End instant
pub async fn create_appointment(
    db: &DatabaseConnection,
    salon_id: i32,
    customer_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, salon_id, customer_id)
        .window(start, end)
        .build()
        .await
}
