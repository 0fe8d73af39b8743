//! Service catalog data repository
//!
//! Provides the `ServiceRepository` for the catalog of bookable services. Only
//! rows without a `deleted_at` marker are returned by the read methods; the
//! owning staff member is joined in so every service carries its salon ID.
//! Like the appointment repository it runs on a connection or a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        page::Page,
        service::{CreateServiceParam, Service, ServiceFilter, UpdateServiceParam},
    },
};

pub struct ServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Joins each service with its owner, dropping rows whose owner is gone.
fn with_salon(
    rows: Vec<(entity::service::Model, Option<entity::salon_user::Model>)>,
) -> Vec<Service> {
    rows.into_iter()
        .filter_map(|(service, owner)| {
            owner.map(|owner| Service::from_entity(service, owner.salon_id))
        })
        .collect()
}

impl<'a, C: ConnectionTrait> ServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new catalog service
    ///
    /// # Arguments
    /// - `param` - Service fields
    /// - `salon_id` - Salon of the owning staff member
    ///
    /// # Returns
    /// - `Ok(Service)` - The created service
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateServiceParam,
        salon_id: i32,
    ) -> Result<Service, AppError> {
        let service = entity::service::ActiveModel {
            salon_user_id: ActiveValue::Set(param.salon_user_id),
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            duration: ActiveValue::Set(param.duration),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(service, salon_id))
    }

    /// Gets an active service by ID
    pub async fn get_active_by_id(&self, id: i32) -> Result<Option<Service>, AppError> {
        let rows = entity::prelude::Service::find_by_id(id)
            .filter(entity::service::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::SalonUser)
            .all(self.db)
            .await?;

        Ok(with_salon(rows).pop())
    }

    /// Gets the active services among `ids`
    ///
    /// Unknown and soft-deleted IDs are simply absent from the result.
    pub async fn find_active_by_ids(&self, ids: &[i32]) -> Result<Vec<Service>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids.to_vec()))
            .filter(entity::service::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::SalonUser)
            .all(self.db)
            .await?;

        Ok(with_salon(rows))
    }

    /// Gets every active service offered at a salon
    pub async fn active_for_salon(&self, salon_id: i32) -> Result<Vec<Service>, AppError> {
        let rows = entity::prelude::Service::find()
            .filter(entity::service::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::SalonUser)
            .filter(entity::salon_user::Column::SalonId.eq(salon_id))
            .order_by_asc(entity::service::Column::Id)
            .all(self.db)
            .await?;

        Ok(with_salon(rows))
    }

    /// Whether the staff member already offers an active service with this name
    ///
    /// # Arguments
    /// - `exclude` - Service to ignore, used when renaming it
    pub async fn name_taken(
        &self,
        salon_user_id: i32,
        name: &str,
        exclude: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut query = entity::prelude::Service::find()
            .filter(entity::service::Column::SalonUserId.eq(salon_user_id))
            .filter(entity::service::Column::Name.eq(name))
            .filter(entity::service::Column::DeletedAt.is_null());
        if let Some(id) = exclude {
            query = query.filter(entity::service::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts the active services a staff member offers
    pub async fn count_active_for_staff(&self, salon_user_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Service::find()
            .filter(entity::service::Column::SalonUserId.eq(salon_user_id))
            .filter(entity::service::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Updates the provided fields of an active service
    ///
    /// Existing appointments keep the window they were booked with; only new
    /// bookings and slot queries see a changed duration.
    ///
    /// # Returns
    /// - `Ok(Some(Service))` - The updated service
    /// - `Ok(None)` - No active service with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateServiceParam,
    ) -> Result<Option<Service>, AppError> {
        let Some(current) = self.get_active_by_id(id).await? else {
            return Ok(None);
        };

        let mut active = entity::service::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(duration) = param.duration {
            active.duration = ActiveValue::Set(duration);
        }
        if !active.is_changed() {
            return Ok(Some(current));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Service::from_entity(updated, current.salon_id)))
    }

    /// Gets a page of active services, newest first
    pub async fn get_paginated(&self, filter: &ServiceFilter) -> Result<Page<Service>, AppError> {
        let mut query = entity::prelude::Service::find()
            .filter(entity::service::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::SalonUser);

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query = query.filter(entity::service::Column::Name.contains(search.trim()));
        }
        if let Some(salon_id) = filter.salon_id {
            query = query.filter(entity::salon_user::Column::SalonId.eq(salon_id));
        }

        let paginator = query
            .order_by_desc(entity::service::Column::CreatedAt)
            .order_by_desc(entity::service::Column::Id)
            .paginate(self.db, filter.limit);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok(Page {
            items: with_salon(rows),
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }

    /// Marks an active service as deleted
    ///
    /// # Returns
    /// - `Ok(Some(Service))` - The service as it was before deletion
    /// - `Ok(None)` - No active service with that ID
    /// - `Err(AppError)` - Database error
    pub async fn soft_delete(
        &self,
        id: i32,
        deleted_at: DateTime<Utc>,
    ) -> Result<Option<Service>, AppError> {
        let Some(service) = self.get_active_by_id(id).await? else {
            return Ok(None);
        };

        entity::service::ActiveModel {
            id: ActiveValue::Unchanged(id),
            deleted_at: ActiveValue::Set(Some(deleted_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(service))
    }
}
