//! Customer data repository
//!
//! Deleted customers keep their row, and their appointments, but are hidden
//! from every read here.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        customer::{CreateCustomerParam, Customer, CustomerFilter, UpdateCustomerParam},
        page::Page,
    },
};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCustomerParam) -> Result<Customer, AppError> {
        let customer = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            mobile: ActiveValue::Set(param.mobile),
            notification_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(customer))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.find_active(id).await?.map(Customer::from_entity))
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::customer::Model>, AppError> {
        Ok(entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::DeletedAt.is_null())
            .one(self.db)
            .await?)
    }

    /// Whether a customer other than `exclude` uses this mobile number
    ///
    /// Deleted customers count: the column is unique, so their numbers stay reserved.
    pub async fn mobile_taken(&self, mobile: &str, exclude: Option<i32>) -> Result<bool, AppError> {
        let mut query =
            entity::prelude::Customer::find().filter(entity::customer::Column::Mobile.eq(mobile));
        if let Some(id) = exclude {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Updates the provided fields of an active customer
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - The updated customer
    /// - `Ok(None)` - No active customer with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCustomerParam,
    ) -> Result<Option<Customer>, AppError> {
        let Some(model) = self.find_active(id).await? else {
            return Ok(None);
        };

        let mut active: entity::customer::ActiveModel = model.into();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(Some(last_name));
        }
        if let Some(mobile) = param.mobile {
            active.mobile = ActiveValue::Set(mobile);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Customer::from_entity(updated)))
    }

    /// Marks an active customer as deleted
    pub async fn soft_delete(
        &self,
        id: i32,
        deleted_at: DateTime<Utc>,
    ) -> Result<Option<Customer>, AppError> {
        let Some(model) = self.find_active(id).await? else {
            return Ok(None);
        };

        let mut active: entity::customer::ActiveModel = model.into();
        active.deleted_at = ActiveValue::Set(Some(deleted_at));
        let deleted = active.update(self.db).await?;

        Ok(Some(Customer::from_entity(deleted)))
    }

    /// Gets a page of active customers, newest first
    pub async fn get_paginated(&self, filter: &CustomerFilter) -> Result<Page<Customer>, AppError> {
        let mut query = entity::prelude::Customer::find()
            .filter(entity::customer::Column::DeletedAt.is_null());

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::customer::Column::FirstName.contains(search))
                    .add(entity::customer::Column::LastName.contains(search))
                    .add(entity::customer::Column::Mobile.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::customer::Column::CreatedAt)
            .order_by_desc(entity::customer::Column::Id)
            .paginate(self.db, filter.limit);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(filter.page.saturating_sub(1))
            .await?
            .into_iter()
            .map(Customer::from_entity)
            .collect();

        Ok(Page {
            items,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }
}
