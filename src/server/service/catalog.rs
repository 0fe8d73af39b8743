//! Service catalog operations.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::server::{
    data::{
        appointment::AppointmentRepository, service::ServiceRepository, staff::StaffRepository,
    },
    error::AppError,
    model::{
        page::Page,
        service::{CreateServiceParam, Service, ServiceFilter, UpdateServiceParam},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a service offered by a staff member
    ///
    /// # Returns
    /// - `Ok(Service)` - The created service
    /// - `Err(AppError::NotFound)` - Staff member does not exist
    /// - `Err(AppError::BadRequest)` - The staff member already offers a service with this name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateServiceParam) -> Result<Service, AppError> {
        let staff = StaffRepository::new(self.db)
            .get_by_id(param.salon_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        let repo = ServiceRepository::new(self.db);
        if repo.name_taken(staff.id, &param.name, None).await? {
            return Err(AppError::BadRequest(
                "Service with this name already exists for this staff member.".to_string(),
            ));
        }

        repo.create(param, staff.salon_id).await
    }

    pub async fn get(&self, id: i32) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .get_active_by_id(id)
            .await?
            .ok_or_else(service_not_found)
    }

    pub async fn list(&self, filter: ServiceFilter) -> Result<Page<Service>, AppError> {
        ServiceRepository::new(self.db).get_paginated(&filter).await
    }

    /// Changes the name, price or duration of an active service
    ///
    /// A new duration changes the slot grid and the length of later bookings;
    /// appointments already booked keep their window.
    ///
    /// # Returns
    /// - `Ok(Service)` - The updated service
    /// - `Err(AppError::NotFound)` - No active service with that ID
    /// - `Err(AppError::BadRequest)` - The owner already offers another service with the new name
    pub async fn update(&self, id: i32, param: UpdateServiceParam) -> Result<Service, AppError> {
        let repo = ServiceRepository::new(self.db);
        let current = repo.get_active_by_id(id).await?.ok_or_else(service_not_found)?;

        if let Some(name) = param.name.as_deref() {
            if repo.name_taken(current.salon_user_id, name, Some(id)).await? {
                return Err(AppError::BadRequest(format!(
                    "Another service named {} already exists for this staff member.",
                    name
                )));
            }
        }

        let service = repo.update(id, param).await?.ok_or_else(service_not_found)?;
        info!("Updated service {} ({})", service.id, service.name);

        Ok(service)
    }

    /// Soft-deletes a service that no pending appointment uses
    ///
    /// The delete is written first and the pending check runs on the same
    /// transaction, so a booking that commits concurrently either blocks the
    /// delete or fails its own re-check of the services.
    ///
    /// # Returns
    /// - `Ok(Service)` - The deleted service
    /// - `Err(AppError::NotFound)` - No active service with that ID
    /// - `Err(AppError::BadRequest)` - A PENDING appointment includes the service
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32, now: DateTime<Utc>) -> Result<Service, AppError> {
        let txn = self.db.begin().await?;

        let service = ServiceRepository::new(&txn)
            .soft_delete(id, now)
            .await?
            .ok_or_else(service_not_found)?;

        let in_use = AppointmentRepository::new(&txn)
            .count_pending_with_service(id)
            .await?;
        if in_use > 0 {
            txn.rollback().await?;
            return Err(AppError::BadRequest(
                "Cannot delete service because it is associated with a pending appointment."
                    .to_string(),
            ));
        }

        txn.commit().await?;
        info!("Deleted service {} ({})", service.id, service.name);

        Ok(service)
    }
}

fn service_not_found() -> AppError {
    AppError::NotFound("Service not found.".to_string())
}
