use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::{
        customer::{CreateCustomerParam, Customer, CustomerFilter, UpdateCustomerParam},
        page::Page,
    },
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer with a mobile number no other customer uses
    pub async fn create(&self, param: CreateCustomerParam) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);
        if repo.mobile_taken(&param.mobile, None).await? {
            return Err(mobile_in_use());
        }

        repo.create(param).await
    }

    pub async fn get(&self, id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }

    pub async fn list(&self, filter: CustomerFilter) -> Result<Page<Customer>, AppError> {
        CustomerRepository::new(self.db).get_paginated(&filter).await
    }

    /// Updates a customer's name or mobile number
    ///
    /// # Returns
    /// - `Ok(Customer)` - The updated customer
    /// - `Err(AppError::NotFound)` - No active customer with that ID
    /// - `Err(AppError::BadRequest)` - Another customer already uses the new mobile number
    pub async fn update(&self, id: i32, param: UpdateCustomerParam) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(customer_not_found(id));
        }
        if let Some(mobile) = param.mobile.as_deref() {
            if repo.mobile_taken(mobile, Some(id)).await? {
                return Err(mobile_in_use());
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }

    /// Soft-deletes a customer. Their appointments are kept.
    pub async fn delete(&self, id: i32, now: DateTime<Utc>) -> Result<Customer, AppError> {
        let customer = CustomerRepository::new(self.db)
            .soft_delete(id, now)
            .await?
            .ok_or_else(|| customer_not_found(id))?;
        info!("Deleted customer {}", customer.id);

        Ok(customer)
    }
}

fn customer_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer with ID {} not found", id))
}

fn mobile_in_use() -> AppError {
    AppError::BadRequest("Mobile number already in use by another user".to_string())
}
