//! Salon data repository for database operations

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        page::Page,
        salon::{CreateSalonParam, Salon, UpdateSalonParam},
    },
};

pub struct SalonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new salon
    ///
    /// # Returns
    /// - `Ok(Salon)` - The created salon
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSalonParam) -> Result<Salon, AppError> {
        let salon = entity::salon::ActiveModel {
            name: ActiveValue::Set(param.name),
            open_time: ActiveValue::Set(param.open_time),
            close_time: ActiveValue::Set(param.close_time),
            timezone: ActiveValue::Set(param.timezone.map(|tz| tz.name().to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Salon::from_entity(salon)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Salon>, AppError> {
        entity::prelude::Salon::find_by_id(id)
            .one(self.db)
            .await?
            .map(Salon::from_entity)
            .transpose()
    }

    /// Gets the salon with the lowest ID
    ///
    /// Used when a request does not name a salon.
    pub async fn first(&self) -> Result<Option<Salon>, AppError> {
        entity::prelude::Salon::find()
            .order_by_asc(entity::salon::Column::Id)
            .one(self.db)
            .await?
            .map(Salon::from_entity)
            .transpose()
    }

    /// Updates the provided fields of a salon
    ///
    /// # Returns
    /// - `Ok(Some(Salon))` - The updated salon
    /// - `Ok(None)` - No salon with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateSalonParam,
    ) -> Result<Option<Salon>, AppError> {
        let Some(model) = entity::prelude::Salon::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::salon::ActiveModel = model.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(open_time) = param.open_time {
            active.open_time = ActiveValue::Set(Some(open_time));
        }
        if let Some(close_time) = param.close_time {
            active.close_time = ActiveValue::Set(Some(close_time));
        }
        if let Some(timezone) = param.timezone {
            active.timezone = ActiveValue::Set(Some(timezone.name().to_string()));
        }

        let updated = active.update(self.db).await?;

        Salon::from_entity(updated).map(Some)
    }

    /// Deletes a salon; its staff, services, leaves and appointments go with it
    ///
    /// # Returns
    /// - `Ok(Some(Salon))` - The deleted salon
    /// - `Ok(None)` - No salon with that ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<Option<Salon>, AppError> {
        let Some(salon) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Salon::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(salon))
    }

    /// Gets a page of salons ordered by ID
    pub async fn get_paginated(&self, page: u64, limit: u64) -> Result<Page<Salon>, AppError> {
        let paginator = entity::prelude::Salon::find()
            .order_by_asc(entity::salon::Column::Id)
            .paginate(self.db, limit);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page.saturating_sub(1))
            .await?
            .into_iter()
            .map(Salon::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page,
            limit,
        })
    }
}
