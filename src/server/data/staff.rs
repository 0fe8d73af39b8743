//! Staff (salon user) data repository
//!
//! Reads skip soft-deleted staff, so a removed member can no longer be given
//! new services.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        page::Page,
        staff::{CreateStaffParam, Staff, StaffFilter, UpdateStaffParam},
    },
};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateStaffParam) -> Result<Staff, AppError> {
        let staff = entity::salon_user::ActiveModel {
            salon_id: ActiveValue::Set(param.salon_id),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Staff::from_entity(staff)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Staff>, AppError> {
        self.find_active(id)
            .await?
            .map(Staff::from_entity)
            .transpose()
    }

    async fn find_active(&self, id: i32) -> Result<Option<entity::salon_user::Model>, AppError> {
        Ok(entity::prelude::SalonUser::find_by_id(id)
            .filter(entity::salon_user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?)
    }

    /// Updates the provided fields of an active staff member
    ///
    /// # Returns
    /// - `Ok(Some(Staff))` - The updated staff member
    /// - `Ok(None)` - No active staff member with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateStaffParam,
    ) -> Result<Option<Staff>, AppError> {
        let Some(model) = self.find_active(id).await? else {
            return Ok(None);
        };

        let mut active: entity::salon_user::ActiveModel = model.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }

        let updated = active.update(self.db).await?;

        Staff::from_entity(updated).map(Some)
    }

    /// Marks an active staff member as deleted
    pub async fn soft_delete(
        &self,
        id: i32,
        deleted_at: DateTime<Utc>,
    ) -> Result<Option<Staff>, AppError> {
        let Some(model) = self.find_active(id).await? else {
            return Ok(None);
        };

        let mut active: entity::salon_user::ActiveModel = model.into();
        active.deleted_at = ActiveValue::Set(Some(deleted_at));
        let deleted = active.update(self.db).await?;

        Staff::from_entity(deleted).map(Some)
    }

    /// Gets a page of active staff, newest first, optionally for one salon
    pub async fn get_paginated(&self, filter: &StaffFilter) -> Result<Page<Staff>, AppError> {
        let mut query = entity::prelude::SalonUser::find()
            .filter(entity::salon_user::Column::DeletedAt.is_null());
        if let Some(salon_id) = filter.salon_id {
            query = query.filter(entity::salon_user::Column::SalonId.eq(salon_id));
        }

        let paginator = query
            .order_by_desc(entity::salon_user::Column::CreatedAt)
            .order_by_desc(entity::salon_user::Column::Id)
            .paginate(self.db, filter.limit);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(filter.page.saturating_sub(1))
            .await?
            .into_iter()
            .map(Staff::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }
}
