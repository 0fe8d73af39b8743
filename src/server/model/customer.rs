use chrono::{DateTime, Utc};

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            mobile: entity.mobile,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            mobile: self.mobile,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCustomerParam {
    pub first_name: String,
    pub last_name: Option<String>,
    pub mobile: String,
}

impl CreateCustomerParam {
    pub fn from_dto(dto: CreateCustomerDto) -> Result<Self, AppError> {
        let mobile = dto.mobile.trim().to_string();
        if mobile.is_empty() {
            return Err(AppError::BadRequest("Mobile number is required.".to_string()));
        }

        Ok(Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name,
            mobile,
        })
    }
}

/// Fields to change on a customer; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
}

impl UpdateCustomerParam {
    pub fn from_dto(dto: UpdateCustomerDto) -> Result<Self, AppError> {
        let mobile = match dto.mobile {
            Some(mobile) if mobile.trim().is_empty() => {
                return Err(AppError::BadRequest("Mobile number is required.".to_string()))
            }
            mobile => mobile.map(|m| m.trim().to_string()),
        };

        Ok(Self {
            first_name: dto.first_name.map(|name| name.trim().to_string()),
            last_name: dto.last_name,
            mobile,
        })
    }
}

/// Filters for listing customers.
#[derive(Debug, Clone)]
pub struct CustomerFilter {
    /// Substring of the first name, last name or mobile number.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}
