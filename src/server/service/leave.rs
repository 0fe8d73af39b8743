//! Salon leave management.
//!
//! Leaves are read by availability and admission on every request, so a new,
//! changed or deleted leave takes effect immediately. Appointments already booked
//! inside a new leave are left untouched.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::server::{
    data::{leave::LeaveRepository, salon::SalonRepository},
    error::AppError,
    model::{
        leave::{CreateLeaveParam, Leave, UpdateLeaveParam},
        page::Page,
    },
};

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a leave for an existing salon
    ///
    /// # Returns
    /// - `Ok(Leave)` - The created leave
    /// - `Err(AppError::NotFound)` - Salon does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateLeaveParam) -> Result<Leave, AppError> {
        if SalonRepository::new(self.db)
            .get_by_id(param.salon_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Salon not found.".to_string()));
        }

        let leave = LeaveRepository::new(self.db).create(param).await?;
        info!(
            "Salon {} on leave {} ({})",
            leave.salon_id,
            leave.date,
            leave.kind.as_str()
        );

        Ok(leave)
    }

    pub async fn get(&self, id: i32) -> Result<Leave, AppError> {
        LeaveRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(leave_not_found)
    }

    pub async fn list(
        &self,
        salon_id: Option<i32>,
        page: u64,
        limit: u64,
    ) -> Result<Page<Leave>, AppError> {
        LeaveRepository::new(self.db)
            .get_paginated(salon_id, page, limit)
            .await
    }

    /// Changes a leave, re-checking the HOURS window on the merged result
    ///
    /// # Returns
    /// - `Ok(Leave)` - The updated leave
    /// - `Err(AppError::NotFound)` - No leave with that ID
    /// - `Err(AppError::BadRequest)` - The merged leave is not a valid DAY or HOURS leave
    pub async fn update(&self, id: i32, param: UpdateLeaveParam) -> Result<Leave, AppError> {
        let repo = LeaveRepository::new(self.db);
        let current = repo.get_by_id(id).await?.ok_or_else(leave_not_found)?;
        let changes = param.merge(&current)?;

        let leave = repo.update(id, changes).await?.ok_or_else(leave_not_found)?;
        info!(
            "Updated leave {} for salon {} on {} ({})",
            leave.id,
            leave.salon_id,
            leave.date,
            leave.kind.as_str()
        );

        Ok(leave)
    }

    pub async fn delete(&self, id: i32) -> Result<Leave, AppError> {
        LeaveRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(leave_not_found)
    }
}

fn leave_not_found() -> AppError {
    AppError::NotFound("Leave not found.".to_string())
}
