//! Domain & parameter models for salon staff

use chrono::{DateTime, Utc};

use crate::{
    model::staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Owner,
    Manager,
    Staff,
}

impl StaffRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Manager => "MANAGER",
            Self::Staff => "STAFF",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [Self::Owner, Self::Manager, Self::Staff]
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value))
    }
}

/// A staff member of a salon. Catalog services are owned by staff.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: i32,
    pub salon_id: i32,
    pub name: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

impl Staff {
    pub fn from_entity(entity: entity::salon_user::Model) -> Result<Self, AppError> {
        let role = StaffRole::parse(&entity.role).ok_or(InternalError::UnknownEnumValue {
            column: "salon_user.role",
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            salon_id: entity.salon_id,
            name: entity.name,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            id: self.id,
            salon_id: self.salon_id,
            name: self.name,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStaffParam {
    pub salon_id: i32,
    pub name: String,
    pub role: StaffRole,
}

fn parse_role(value: &str) -> Result<StaffRole, AppError> {
    StaffRole::parse(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid role '{}'. Expected one of OWNER, MANAGER, STAFF",
            value
        ))
    })
}

impl CreateStaffParam {
    pub fn from_dto(dto: CreateStaffDto) -> Result<Self, AppError> {
        let role = parse_role(&dto.role)?;

        Ok(Self {
            salon_id: dto.salon_id,
            name: dto.name.trim().to_string(),
            role,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStaffParam {
    pub name: Option<String>,
    pub role: Option<StaffRole>,
}

impl UpdateStaffParam {
    pub fn from_dto(dto: UpdateStaffDto) -> Result<Self, AppError> {
        let name = dto.name.map(|name| name.trim().to_string());
        if name.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Name is required.".to_string()));
        }
        let role = dto.role.as_deref().map(parse_role).transpose()?;

        Ok(Self { name, role })
    }
}

/// Filters for listing staff.
#[derive(Debug, Clone)]
pub struct StaffFilter {
    pub salon_id: Option<i32>,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}
