//! Domain & parameter models for the service catalog
//!
//! A service belongs to a staff member; its salon is resolved through that staff
//! member when loading, so booking admission can tell which salon timeline a set
//! of services occupies.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub salon_user_id: i32,
    pub salon_id: i32,
    pub name: String,
    pub price: f64,
    /// Duration in minutes, always positive.
    pub duration: i32,
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Converts an entity model to the service domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `salon_id` - Salon of the owning staff member
    pub fn from_entity(entity: entity::service::Model, salon_id: i32) -> Self {
        Self {
            id: entity.id,
            salon_user_id: entity.salon_user_id,
            salon_id,
            name: entity.name,
            price: entity.price,
            duration: entity.duration,
            created_at: entity.created_at,
        }
    }

    pub fn length(&self) -> Duration {
        Duration::minutes(i64::from(self.duration))
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            salon_user_id: self.salon_user_id,
            salon_id: self.salon_id,
            name: self.name,
            price: self.price,
            duration: self.duration,
            duration_text: format_duration_text(self.duration),
            created_at: self.created_at,
        }
    }
}

/// Renders minutes as `"45 min"`, `"2 hrs"` or `"1 hr and 30 min"`.
pub fn format_duration_text(minutes: i32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    let hours_text = match hours {
        0 => None,
        1 => Some("1 hr".to_string()),
        n => Some(format!("{} hrs", n)),
    };

    match (hours_text, rest) {
        (None, rest) => format!("{} min", rest),
        (Some(hours), 0) => hours,
        (Some(hours), rest) => format!("{} and {} min", hours, rest),
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParam {
    pub salon_user_id: i32,
    pub name: String,
    pub price: f64,
    pub duration: i32,
}

impl CreateServiceParam {
    pub fn from_dto(dto: CreateServiceDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Service name is required.".to_string()));
        }
        if dto.duration <= 0 {
            return Err(AppError::BadRequest(
                "Duration must be greater than zero.".to_string(),
            ));
        }
        if dto.price < 0.0 {
            return Err(AppError::BadRequest("Price cannot be negative.".to_string()));
        }

        Ok(Self {
            salon_user_id: dto.salon_user_id,
            name,
            price: dto.price,
            duration: dto.duration,
        })
    }
}

/// Fields to change on a service; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParam {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl UpdateServiceParam {
    /// Applies the same field rules as creation to each provided field.
    pub fn from_dto(dto: UpdateServiceDto) -> Result<Self, AppError> {
        let name = dto.name.map(|name| name.trim().to_string());
        if name.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Service name is required.".to_string()));
        }
        if dto.duration.is_some_and(|duration| duration <= 0) {
            return Err(AppError::BadRequest(
                "Duration must be greater than zero.".to_string(),
            ));
        }
        if dto.price.is_some_and(|price| price < 0.0) {
            return Err(AppError::BadRequest("Price cannot be negative.".to_string()));
        }

        Ok(Self {
            name,
            price: dto.price,
            duration: dto.duration,
        })
    }
}

/// Filters for listing active services.
#[derive(Debug, Clone)]
pub struct ServiceFilter {
    /// Case-insensitive substring of the service name.
    pub search: Option<String>,
    pub salon_id: Option<i32>,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}
