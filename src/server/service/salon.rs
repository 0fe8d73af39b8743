//! Salon and staff registration.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::server::{
    data::{
        appointment::AppointmentRepository, salon::SalonRepository, service::ServiceRepository,
        staff::StaffRepository,
    },
    error::AppError,
    model::{
        page::Page,
        salon::{CreateSalonParam, Salon, UpdateSalonParam},
        staff::{CreateStaffParam, Staff, StaffFilter, UpdateStaffParam},
    },
};

pub struct SalonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSalonParam) -> Result<Salon, AppError> {
        SalonRepository::new(self.db).create(param).await
    }

    pub async fn get(&self, id: i32) -> Result<Salon, AppError> {
        SalonRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(salon_not_found)
    }

    /// Changes the provided fields of a salon
    ///
    /// New hours apply to availability and admission immediately; existing
    /// appointments are left as booked.
    pub async fn update(&self, id: i32, param: UpdateSalonParam) -> Result<Salon, AppError> {
        if matches!(&param.name, Some(name) if name.is_empty()) {
            return Err(AppError::BadRequest("Salon name is required.".to_string()));
        }

        SalonRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(salon_not_found)
    }

    pub async fn list(&self, page: u64, limit: u64) -> Result<Page<Salon>, AppError> {
        SalonRepository::new(self.db).get_paginated(page, limit).await
    }

    /// Deletes a salon together with everything that belongs to it
    ///
    /// # Returns
    /// - `Ok(Salon)` - The deleted salon
    /// - `Err(AppError::NotFound)` - Salon does not exist
    /// - `Err(AppError::BadRequest)` - The salon still has PENDING appointments
    pub async fn delete(&self, id: i32) -> Result<Salon, AppError> {
        let repo = SalonRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(salon_not_found());
        }

        let pending = AppointmentRepository::new(self.db)
            .count_pending_for_salon(id)
            .await?;
        if pending > 0 {
            return Err(AppError::BadRequest(
                "Cannot delete salon because it has pending appointments.".to_string(),
            ));
        }

        let salon = repo.delete(id).await?.ok_or_else(salon_not_found)?;
        info!("Deleted salon {} ({})", salon.id, salon.name);

        Ok(salon)
    }
}

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a staff member to an existing salon
    ///
    /// # Returns
    /// - `Ok(Staff)` - The created staff member
    /// - `Err(AppError::NotFound)` - Salon does not exist
    /// - `Err(AppError::BadRequest)` - Name is empty
    pub async fn create(&self, param: CreateStaffParam) -> Result<Staff, AppError> {
        if param.name.is_empty() {
            return Err(AppError::BadRequest("Name is required.".to_string()));
        }
        if SalonRepository::new(self.db)
            .get_by_id(param.salon_id)
            .await?
            .is_none()
        {
            return Err(salon_not_found());
        }

        StaffRepository::new(self.db).create(param).await
    }

    pub async fn get(&self, id: i32) -> Result<Staff, AppError> {
        StaffRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(staff_not_found)
    }

    pub async fn list(&self, filter: StaffFilter) -> Result<Page<Staff>, AppError> {
        StaffRepository::new(self.db).get_paginated(&filter).await
    }

    pub async fn update(&self, id: i32, param: UpdateStaffParam) -> Result<Staff, AppError> {
        StaffRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(staff_not_found)
    }

    /// Soft-deletes a staff member who no longer offers any service
    ///
    /// # Returns
    /// - `Ok(Staff)` - The deleted staff member
    /// - `Err(AppError::NotFound)` - No active staff member with that ID
    /// - `Err(AppError::BadRequest)` - The staff member still owns active services
    pub async fn delete(&self, id: i32, now: DateTime<Utc>) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(staff_not_found());
        }

        let services = ServiceRepository::new(self.db)
            .count_active_for_staff(id)
            .await?;
        if services > 0 {
            return Err(AppError::BadRequest(
                "Cannot delete user because they still offer active services.".to_string(),
            ));
        }

        let staff = repo.soft_delete(id, now).await?.ok_or_else(staff_not_found)?;
        info!("Deleted staff member {} ({})", staff.id, staff.name);

        Ok(staff)
    }
}

fn salon_not_found() -> AppError {
    AppError::NotFound("Salon not found.".to_string())
}

fn staff_not_found() -> AppError {
    AppError::NotFound("User not found.".to_string())
}
