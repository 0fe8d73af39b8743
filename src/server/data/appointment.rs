//! Appointment data repository for database operations
//!
//! Provides the `AppointmentRepository` for reading and writing appointments and
//! their service associations. The repository is generic over the connection so
//! booking admission can run its overlap check and insert on one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::{
    error::AppError,
    model::{
        appointment::{
            Appointment, AppointmentChanges, AppointmentFilter, AppointmentStatus, NewAppointment,
        },
        page::Page,
    },
    util::interval::Interval,
};

/// Repository providing database operations for appointments.
///
/// Works on any `ConnectionTrait`, so it accepts a `DatabaseConnection` as well
/// as a `DatabaseTransaction`.
pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    /// Creates a new AppointmentRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated booking with status `PENDING` and links its services
    ///
    /// # Arguments
    /// - `param` - Booking that already passed admission checks
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: NewAppointment) -> Result<Appointment, AppError> {
        let appointment = entity::appointment::ActiveModel {
            salon_id: ActiveValue::Set(param.salon_id),
            customer_id: ActiveValue::Set(param.customer_id),
            date: ActiveValue::Set(param.date),
            start_time: ActiveValue::Set(param.window.start),
            end_time: ActiveValue::Set(param.window.end),
            status: ActiveValue::Set(AppointmentStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.link_services(appointment.id, &param.service_ids)
            .await?;

        Appointment::from_entity(appointment, param.service_ids)
    }

    /// Gets an appointment by ID with its service IDs
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The appointment if found
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, AppError> {
        let Some(model) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_service_ids(vec![model]).await?.pop())
    }

    /// Gets a page of appointments, newest first
    ///
    /// # Arguments
    /// - `filter` - Optional status and customer filters plus the 1-based page
    ///
    /// # Returns
    /// - `Ok(Page<Appointment>)` - Appointments of the page and the total count
    /// - `Err(AppError)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Page<Appointment>, AppError> {
        let mut query = entity::prelude::Appointment::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::appointment::Column::Status.eq(status.as_str()));
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(entity::appointment::Column::CustomerId.eq(customer_id));
        }

        let paginator = query
            .order_by_desc(entity::appointment::Column::CreatedAt)
            .order_by_desc(entity::appointment::Column::Id)
            .paginate(self.db, filter.limit);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok(Page {
            items: self.with_service_ids(models).await?,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }

    /// Finds PENDING appointments of a salon overlapping a window
    ///
    /// Uses the half-open test `start < window.end AND end > window.start`.
    ///
    /// # Arguments
    /// - `salon_id` - Salon timeline to look at
    /// - `window` - Window to test against
    /// - `exclude_id` - Appointment to leave out, used when rescheduling it
    ///
    /// # Returns
    /// - `Ok(Vec<Appointment>)` - Overlapping appointments ordered by start time
    /// - `Err(AppError)` - Database error
    pub async fn find_pending_overlapping(
        &self,
        salon_id: i32,
        window: Interval,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Appointment>, AppError> {
        use entity::appointment::Column;

        let mut query = entity::prelude::Appointment::find()
            .filter(Column::SalonId.eq(salon_id))
            .filter(Column::Status.eq(AppointmentStatus::Pending.as_str()))
            .filter(Column::StartTime.lt(window.end))
            .filter(Column::EndTime.gt(window.start));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        let models = query
            .order_by_asc(Column::StartTime)
            .all(self.db)
            .await?;

        self.with_service_ids(models).await
    }

    /// Replaces the stored values of an appointment
    ///
    /// Status is left untouched. When `changes.service_ids` is set the service
    /// associations are replaced as a whole.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The updated appointment
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update(
        &self,
        id: i32,
        changes: AppointmentChanges,
    ) -> Result<Option<Appointment>, AppError> {
        let Some(model) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = model.into();
        active.salon_id = ActiveValue::Set(changes.salon_id);
        active.customer_id = ActiveValue::Set(changes.customer_id);
        active.date = ActiveValue::Set(changes.date);
        active.start_time = ActiveValue::Set(changes.window.start);
        active.end_time = ActiveValue::Set(changes.window.end);
        active.notes = ActiveValue::Set(changes.notes);
        let updated = active.update(self.db).await?;

        if let Some(service_ids) = &changes.service_ids {
            entity::prelude::AppointmentService::delete_many()
                .filter(entity::appointment_service::Column::AppointmentId.eq(id))
                .exec(self.db)
                .await?;
            self.link_services(id, service_ids).await?;
        }

        Ok(self.with_service_ids(vec![updated]).await?.pop())
    }

    /// Sets the status of an appointment
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The updated appointment
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(AppError)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, AppError> {
        let Some(model) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = model.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        let updated = active.update(self.db).await?;

        Ok(self.with_service_ids(vec![updated]).await?.pop())
    }

    /// Deletes an appointment and its service associations
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The deleted appointment
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<Option<Appointment>, AppError> {
        let Some(appointment) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::AppointmentService::delete_many()
            .filter(entity::appointment_service::Column::AppointmentId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(appointment))
    }

    /// Marks every PENDING appointment that ended at or before `now` as COMPLETED
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of appointments transitioned
    /// - `Err(AppError)` - Database error
    pub async fn complete_elapsed(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        use entity::appointment::Column;

        let result = entity::prelude::Appointment::update_many()
            .col_expr(
                Column::Status,
                Expr::value(AppointmentStatus::Completed.as_str()),
            )
            .filter(Column::Status.eq(AppointmentStatus::Pending.as_str()))
            .filter(Column::EndTime.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts PENDING appointments that include a service
    pub async fn count_pending_with_service(&self, service_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Appointment::find()
            .join(
                JoinType::InnerJoin,
                entity::appointment::Relation::AppointmentService.def(),
            )
            .filter(entity::appointment_service::Column::ServiceId.eq(service_id))
            .filter(
                entity::appointment::Column::Status.eq(AppointmentStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts PENDING appointments booked at a salon
    pub async fn count_pending_for_salon(&self, salon_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::SalonId.eq(salon_id))
            .filter(
                entity::appointment::Column::Status.eq(AppointmentStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count)
    }

    async fn link_services(&self, appointment_id: i32, service_ids: &[i32]) -> Result<(), DbErr> {
        for &service_id in service_ids {
            entity::appointment_service::ActiveModel {
                appointment_id: ActiveValue::Set(appointment_id),
                service_id: ActiveValue::Set(service_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Loads service IDs for a batch of appointments in one query
    async fn with_service_ids(
        &self,
        models: Vec<entity::appointment::Model>,
    ) -> Result<Vec<Appointment>, AppError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut links: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in entity::prelude::AppointmentService::find()
            .filter(entity::appointment_service::Column::AppointmentId.is_in(ids))
            .order_by_asc(entity::appointment_service::Column::ServiceId)
            .all(self.db)
            .await?
        {
            links
                .entry(link.appointment_id)
                .or_default()
                .push(link.service_id);
        }

        models
            .into_iter()
            .map(|model| {
                let service_ids = links.remove(&model.id).unwrap_or_default();
                Appointment::from_entity(model, service_ids)
            })
            .collect()
    }
}
