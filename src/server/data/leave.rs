//! Leave data repository for database operations

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        leave::{CreateLeaveParam, Leave, LeaveChanges},
        page::Page,
    },
};

pub struct LeaveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new leave
    ///
    /// # Returns
    /// - `Ok(Leave)` - The created leave
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateLeaveParam) -> Result<Leave, AppError> {
        let leave = entity::leave::ActiveModel {
            salon_id: ActiveValue::Set(param.salon_id),
            date: ActiveValue::Set(param.date),
            leave_type: ActiveValue::Set(param.kind.as_str().to_string()),
            start_time: ActiveValue::Set(param.kind.start_time()),
            end_time: ActiveValue::Set(param.kind.end_time()),
            reason: ActiveValue::Set(param.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Leave::from_entity(leave)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Leave>, AppError> {
        entity::prelude::Leave::find_by_id(id)
            .one(self.db)
            .await?
            .map(Leave::from_entity)
            .transpose()
    }

    /// Writes merged changes over a leave
    ///
    /// # Returns
    /// - `Ok(Some(Leave))` - The updated leave
    /// - `Ok(None)` - No leave with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, changes: LeaveChanges) -> Result<Option<Leave>, AppError> {
        let Some(model) = entity::prelude::Leave::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::leave::ActiveModel = model.into();
        active.date = ActiveValue::Set(changes.date);
        active.leave_type = ActiveValue::Set(changes.kind.as_str().to_string());
        active.start_time = ActiveValue::Set(changes.kind.start_time());
        active.end_time = ActiveValue::Set(changes.kind.end_time());
        active.reason = ActiveValue::Set(changes.reason);

        let updated = active.update(self.db).await?;

        Leave::from_entity(updated).map(Some)
    }

    /// Gets every leave of a salon on a calendar date
    pub async fn get_for_salon_on(
        &self,
        salon_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<Leave>, AppError> {
        entity::prelude::Leave::find()
            .filter(entity::leave::Column::SalonId.eq(salon_id))
            .filter(entity::leave::Column::Date.eq(date))
            .order_by_asc(entity::leave::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Leave::from_entity)
            .collect()
    }

    /// Gets a page of leaves, newest first, optionally for one salon
    pub async fn get_paginated(
        &self,
        salon_id: Option<i32>,
        page: u64,
        limit: u64,
    ) -> Result<Page<Leave>, AppError> {
        let mut query = entity::prelude::Leave::find();
        if let Some(salon_id) = salon_id {
            query = query.filter(entity::leave::Column::SalonId.eq(salon_id));
        }

        let paginator = query
            .order_by_desc(entity::leave::Column::CreatedAt)
            .order_by_desc(entity::leave::Column::Id)
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await?
            .into_iter()
            .map(Leave::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page,
            limit,
        })
    }

    /// Deletes a leave
    ///
    /// # Returns
    /// - `Ok(Some(Leave))` - The deleted leave
    /// - `Ok(None)` - No leave with that ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<Option<Leave>, AppError> {
        let Some(leave) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Leave::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(leave))
    }
}
