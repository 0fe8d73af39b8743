//! Domain & parameter models for appointment operations
//!
//! Defines the appointment domain model with its lifecycle status, the parameters
//! accepted by booking admission, and the records handed to the repository once a
//! booking has passed validation.

use chrono::{DateTime, NaiveDate, Utc};
use std::{collections::HashSet, fmt};

use crate::{
    model::appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto},
    server::{
        error::{internal::InternalError, AppError},
        util::{interval::Interval, parse::parse_date},
    },
};

/// Lifecycle status of an appointment.
///
/// Only `Pending` appointments occupy the salon timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status name, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        [
            Self::Pending,
            Self::Confirmed,
            Self::Completed,
            Self::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }

    /// Parses a status supplied by a client.
    ///
    /// # Returns
    /// - `Ok(AppointmentStatus)` - Known status
    /// - `Err(AppError::BadRequest)` - Unknown status name
    pub fn from_param(value: &str) -> Result<Self, AppError> {
        Self::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid status '{}'. Expected one of PENDING, CONFIRMED, COMPLETED, CANCELLED",
                value
            ))
        })
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked appointment on a salon timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub salon_id: i32,
    pub customer_id: i32,
    /// Calendar date the booking was made for, in the salon's zone.
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub service_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model and its associated service IDs to the domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `service_ids` - IDs from the `appointment_service` association
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - Stored status is not recognized
    pub fn from_entity(
        entity: entity::appointment::Model,
        service_ids: Vec<i32>,
    ) -> Result<Self, AppError> {
        let status =
            AppointmentStatus::parse(&entity.status).ok_or(InternalError::UnknownEnumValue {
                column: "appointment.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            salon_id: entity.salon_id,
            customer_id: entity.customer_id,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status,
            notes: entity.notes,
            service_ids,
            created_at: entity.created_at,
        })
    }

    pub fn window(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            salon_id: self.salon_id,
            customer_id: self.customer_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status.to_string(),
            notes: self.notes,
            service_ids: self.service_ids,
            created_at: self.created_at,
        }
    }
}

/// Rejects empty or repeated service ID lists.
fn validate_service_ids(service_ids: &[i32]) -> Result<(), AppError> {
    if service_ids.is_empty() {
        return Err(AppError::BadRequest(
            "At least one service is required.".to_string(),
        ));
    }

    let unique: HashSet<i32> = service_ids.iter().copied().collect();
    if unique.len() != service_ids.len() {
        return Err(AppError::BadRequest(
            "Service IDs must be unique.".to_string(),
        ));
    }

    Ok(())
}

/// Parameters for booking a new appointment.
///
/// The start time stays a raw clock label so admission can report a missing or
/// malformed label in its own validation order.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParam {
    pub customer_id: i32,
    pub service_ids: Vec<i32>,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub notes: Option<String>,
}

impl CreateAppointmentParam {
    pub fn from_dto(dto: CreateAppointmentDto) -> Result<Self, AppError> {
        validate_service_ids(&dto.service_ids)?;

        Ok(Self {
            customer_id: dto.customer_id,
            service_ids: dto.service_ids,
            date: parse_date(&dto.date)?,
            start_time: dto.start_time,
            notes: dto.notes,
        })
    }
}

/// Parameters for a partial appointment update.
///
/// All fields are optional; only provided fields change. A provided service list
/// replaces the stored association set.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParam {
    pub customer_id: Option<i32>,
    pub service_ids: Option<Vec<i32>>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub notes: Option<String>,
}

impl UpdateAppointmentParam {
    pub fn from_dto(dto: UpdateAppointmentDto) -> Result<Self, AppError> {
        if let Some(service_ids) = &dto.service_ids {
            validate_service_ids(service_ids)?;
        }

        Ok(Self {
            customer_id: dto.customer_id,
            service_ids: dto.service_ids,
            date: dto.date.as_deref().map(parse_date).transpose()?,
            start_time: dto.start_time,
            notes: dto.notes,
        })
    }

    /// Whether the update moves the appointment or changes its length.
    pub fn reschedules(&self) -> bool {
        self.date.is_some() || self.start_time.is_some() || self.service_ids.is_some()
    }
}

/// Filters for listing appointments.
#[derive(Debug, Clone)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub customer_id: Option<i32>,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}

/// A validated booking ready to be persisted with status `PENDING`.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub salon_id: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    pub window: Interval,
    pub notes: Option<String>,
    pub service_ids: Vec<i32>,
}

/// Full replacement values for a stored appointment.
///
/// `service_ids` of `None` leaves the association set untouched.
#[derive(Debug, Clone)]
pub struct AppointmentChanges {
    pub salon_id: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    pub window: Interval,
    pub notes: Option<String>,
    pub service_ids: Option<Vec<i32>>,
}
