//! Domain & parameter models for salons

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::{
    model::salon::{CreateSalonDto, SalonDto, UpdateSalonDto},
    server::{
        error::{internal::InternalError, AppError},
        model::availability::SalonHours,
        util::{
            parse::{parse_optional_clock_label, parse_timezone},
            time::format_time_of_day,
        },
    },
};

/// The salon domain model
///
/// Opening and closing hours are optional so a salon can be registered before
/// its schedule is known. Availability and booking treat missing hours as a
/// configuration defect.
#[derive(Debug, Clone, PartialEq)]
pub struct Salon {
    pub id: i32,
    pub name: String,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub timezone: Option<Tz>,
    pub created_at: DateTime<Utc>,
}

impl Salon {
    /// Converts an entity model to the salon domain model
    ///
    /// # Returns
    /// - `Ok(Salon)` - The converted domain model
    /// - `Err(AppError::InternalErr(InvalidSalonTimezone))` - Stored zone name is unknown
    pub fn from_entity(entity: entity::salon::Model) -> Result<Self, AppError> {
        let timezone = match entity.timezone {
            Some(name) => Some(name.parse::<Tz>().map_err(|_| {
                InternalError::InvalidSalonTimezone {
                    salon_id: entity.id,
                    value: name.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            open_time: entity.open_time,
            close_time: entity.close_time,
            timezone,
            created_at: entity.created_at,
        })
    }

    /// Zone all civil times of this salon are expressed in.
    pub fn zone(&self, default: Tz) -> Tz {
        self.timezone.unwrap_or(default)
    }

    /// Both opening and closing time, when configured.
    pub fn hours(&self) -> Option<SalonHours> {
        Some(SalonHours {
            open: self.open_time?,
            close: self.close_time?,
        })
    }

    pub fn into_dto(self) -> SalonDto {
        SalonDto {
            id: self.id,
            name: self.name,
            open_time: self.open_time.map(format_time_of_day),
            close_time: self.close_time.map(format_time_of_day),
            timezone: self.timezone.map(|tz| tz.name().to_string()),
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a salon.
#[derive(Debug, Clone)]
pub struct CreateSalonParam {
    pub name: String,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub timezone: Option<Tz>,
}

impl CreateSalonParam {
    pub fn from_dto(dto: CreateSalonDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Salon name is required.".to_string()));
        }

        Ok(Self {
            name,
            open_time: parse_optional_clock_label(dto.open_time.as_deref())?,
            close_time: parse_optional_clock_label(dto.close_time.as_deref())?,
            timezone: dto.timezone.as_deref().map(parse_timezone).transpose()?,
        })
    }
}

/// Parameters for updating a salon; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateSalonParam {
    pub name: Option<String>,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub timezone: Option<Tz>,
}

impl UpdateSalonParam {
    pub fn from_dto(dto: UpdateSalonDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|name| name.trim().to_string()),
            open_time: parse_optional_clock_label(dto.open_time.as_deref())?,
            close_time: parse_optional_clock_label(dto.close_time.as_deref())?,
            timezone: dto.timezone.as_deref().map(parse_timezone).transpose()?,
        })
    }
}
