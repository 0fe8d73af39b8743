//! Booking admission control.
//!
//! Every write to an appointment's time window goes through this service.
//! Checks run fail-fast in a fixed order and reject before anything is written.
//! The final overlap check and the write run under the per-(salon, date) lock
//! and inside one transaction, so two overlapping requests cannot both pass.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::server::{
    data::{
        appointment::AppointmentRepository, customer::CustomerRepository,
        leave::LeaveRepository, salon::SalonRepository, service::ServiceRepository,
    },
    error::{booking::BookingError, AppError},
    model::{
        appointment::{
            Appointment, AppointmentChanges, AppointmentFilter, AppointmentStatus,
            CreateAppointmentParam, NewAppointment, UpdateAppointmentParam,
        },
        page::Page,
        salon::Salon,
    },
    service::booking_lock::BookingLocks,
    util::{
        interval::Interval,
        parse::parse_clock_label,
        time::{
            booking_start, close_instant, format_clock_label, format_time_of_day, local_clock,
            rebase,
        },
    },
};

/// What a booking occupies, before its salon and start are checked.
enum Booked<'p> {
    /// Services requested by the client, validated against the catalog.
    Services(&'p [i32]),
    /// The services already on an appointment that is being moved.
    Kept { salon_id: i32, length: Duration },
}

/// Outcome of the checks that need no lock.
struct Admission {
    salon: Salon,
    tz: Tz,
    window: Interval,
}

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a BookingLocks,
    default_tz: Tz,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new AppointmentService instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Shared per-(salon, date) booking locks
    /// - `default_tz` - Zone for salons without their own timezone
    pub fn new(db: &'a DatabaseConnection, locks: &'a BookingLocks, default_tz: Tz) -> Self {
        Self {
            db,
            locks,
            default_tz,
        }
    }

    /// Books a new appointment
    ///
    /// Checks in order: start label present, label well formed, start strictly
    /// after `now`, every service active, customer exists, services resolve to
    /// one salon with a closing time, the booking starts no earlier than opening
    /// and fits before closing, no leave in the way, and finally no overlapping
    /// PENDING appointment. The services are checked once more on the write
    /// transaction, after the insert, so a service deleted in between rejects
    /// the booking.
    ///
    /// # Arguments
    /// - `param` - Booking request
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The stored PENDING appointment
    /// - `Err(AppError::BookingErr)` - A booking rule rejected the request
    /// - `Err(AppError::BadRequest)` - Malformed start label
    /// - `Err(AppError::NotFound)` - Customer does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateAppointmentParam,
        now: DateTime<Utc>,
    ) -> Result<Appointment, AppError> {
        let label = param
            .start_time
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .ok_or(BookingError::MissingStartTime)?;
        let clock = parse_clock_label(label)?;

        let admission = self
            .admit(
                param.date,
                clock,
                Booked::Services(&param.service_ids),
                Some(param.customer_id),
                now,
            )
            .await?;

        let _guard = self.locks.acquire(admission.salon.id, param.date).await;
        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        ensure_free(&repo, &admission, None).await?;
        let appointment = repo
            .create(NewAppointment {
                salon_id: admission.salon.id,
                customer_id: param.customer_id,
                date: param.date,
                window: admission.window,
                notes: param.notes,
                service_ids: param.service_ids.clone(),
            })
            .await?;
        ensure_services_active(&txn, &param.service_ids).await?;

        txn.commit().await?;

        info!(
            "Booked appointment {} at salon {} from {} to {}",
            appointment.id, appointment.salon_id, appointment.start_time, appointment.end_time
        );

        Ok(appointment)
    }

    /// Applies a partial update to an appointment
    ///
    /// Changing the date, start time or services re-runs the booking checks,
    /// ignoring the appointment itself when looking for overlaps. A new date
    /// without a start time keeps the booked local start, and unchanged services
    /// keep the booked duration.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The updated appointment
    /// - `Err(AppError::NotFound)` - Appointment or new customer does not exist
    /// - `Err(AppError::BookingErr)` - A booking rule rejected the new schedule
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAppointmentParam,
        now: DateTime<Utc>,
    ) -> Result<Appointment, AppError> {
        let existing = AppointmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(appointment_not_found)?;

        let customer_id = param.customer_id.unwrap_or(existing.customer_id);
        let notes = param.notes.clone().or_else(|| existing.notes.clone());

        if !param.reschedules() {
            if param.customer_id.is_some() {
                self.ensure_customer(customer_id).await?;
            }

            return AppointmentRepository::new(self.db)
                .update(
                    id,
                    AppointmentChanges {
                        salon_id: existing.salon_id,
                        customer_id,
                        date: existing.date,
                        window: existing.window(),
                        notes,
                        service_ids: None,
                    },
                )
                .await?
                .ok_or_else(appointment_not_found);
        }

        let date = param.date.unwrap_or(existing.date);
        let clock = match param.start_time.as_deref() {
            Some(label) => parse_clock_label(label)?,
            None => {
                let booked_tz = SalonRepository::new(self.db)
                    .get_by_id(existing.salon_id)
                    .await?
                    .map_or(self.default_tz, |salon| salon.zone(self.default_tz));
                local_clock(existing.start_time, booked_tz)
            }
        };
        let booked = match param.service_ids.as_deref() {
            Some(service_ids) => Booked::Services(service_ids),
            None => Booked::Kept {
                salon_id: existing.salon_id,
                length: existing.window().length(),
            },
        };

        let admission = self
            .admit(date, clock, booked, param.customer_id, now)
            .await?;

        let _guard = self.locks.acquire(admission.salon.id, date).await;
        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        ensure_free(&repo, &admission, Some(id)).await?;
        let appointment = repo
            .update(
                id,
                AppointmentChanges {
                    salon_id: admission.salon.id,
                    customer_id,
                    date,
                    window: admission.window,
                    notes,
                    service_ids: param.service_ids.clone(),
                },
            )
            .await?
            .ok_or_else(appointment_not_found)?;
        if let Some(service_ids) = param.service_ids.as_deref() {
            ensure_services_active(&txn, service_ids).await?;
        }

        txn.commit().await?;

        info!(
            "Rescheduled appointment {} to {} - {}",
            appointment.id, appointment.start_time, appointment.end_time
        );

        Ok(appointment)
    }

    /// Sets the status of an appointment without transition rules
    pub async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        AppointmentRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(appointment_not_found)
    }

    pub async fn get(&self, id: i32) -> Result<Appointment, AppError> {
        AppointmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(appointment_not_found)
    }

    pub async fn list(&self, filter: AppointmentFilter) -> Result<Page<Appointment>, AppError> {
        AppointmentRepository::new(self.db)
            .get_paginated(&filter)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<Appointment, AppError> {
        AppointmentRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(appointment_not_found)
    }

    /// Marks PENDING appointments that ended at or before `now` as COMPLETED
    ///
    /// Elapsed appointments cannot conflict with new bookings, so this runs
    /// without the booking locks.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of appointments completed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn complete_elapsed(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let completed = AppointmentRepository::new(self.db)
            .complete_elapsed(now)
            .await?;

        if completed > 0 {
            info!("Marked {} elapsed appointment(s) as completed", completed);
        }

        Ok(completed)
    }

    /// Runs every check that does not need the booking lock.
    async fn admit(
        &self,
        date: NaiveDate,
        clock: NaiveTime,
        booked: Booked<'_>,
        customer_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<Admission, AppError> {
        let salon_repo = SalonRepository::new(self.db);

        let (salon, length, invalid, salon_count) = match booked {
            Booked::Services(service_ids) => {
                let services = ServiceRepository::new(self.db)
                    .find_active_by_ids(service_ids)
                    .await?;
                let invalid: Vec<i32> = service_ids
                    .iter()
                    .copied()
                    .filter(|id| !services.iter().any(|service| service.id == *id))
                    .collect();
                let salon_ids: BTreeSet<i32> =
                    services.iter().map(|service| service.salon_id).collect();
                let salon = match salon_ids.iter().next() {
                    Some(salon_id) if salon_ids.len() == 1 => {
                        salon_repo.get_by_id(*salon_id).await?
                    }
                    _ => None,
                };
                let length = services
                    .iter()
                    .fold(Duration::zero(), |total, service| total + service.length());

                (salon, length, invalid, salon_ids.len())
            }
            Booked::Kept { salon_id, length } => {
                (salon_repo.get_by_id(salon_id).await?, length, Vec::new(), 1)
            }
        };

        let tz = salon
            .as_ref()
            .map_or(self.default_tz, |salon| salon.zone(self.default_tz));
        let start = booking_start(date, clock, tz);

        if start <= now {
            return Err(BookingError::PastStartTime.into());
        }
        if !invalid.is_empty() {
            return Err(BookingError::InvalidServices(invalid).into());
        }
        if let Some(customer_id) = customer_id {
            self.ensure_customer(customer_id).await?;
        }
        if salon_count > 1 {
            return Err(BookingError::MultipleSalons.into());
        }
        let salon = salon.ok_or(BookingError::SalonNotResolved)?;
        let close = salon
            .close_time
            .ok_or(BookingError::ClosingTimeNotConfigured)?;

        let window = Interval::starting_at(start, length);

        if let Some(open) = salon.open_time {
            if window.start < rebase(date, open, tz) {
                return Err(BookingError::BeforeOpening {
                    opens_at: format_time_of_day(open),
                }
                .into());
            }
        }

        let closes = close_instant(date, close, tz);

        if window.start >= closes || window.end > closes {
            return Err(BookingError::AfterClosing {
                closes_at: format_time_of_day(close),
            }
            .into());
        }

        for leave in LeaveRepository::new(self.db)
            .get_for_salon_on(salon.id, date)
            .await?
        {
            match leave.window(tz) {
                None => return Err(BookingError::ClosedForLeave.into()),
                Some(blocked) if blocked.overlaps(&window) => {
                    return Err(BookingError::DuringLeave {
                        from: format_clock_label(blocked.start, tz),
                        until: format_clock_label(blocked.end, tz),
                    }
                    .into())
                }
                Some(_) => {}
            }
        }

        debug!(
            "Admission checks passed for salon {} window {} - {}",
            salon.id, window.start, window.end
        );

        Ok(Admission { salon, tz, window })
    }

    async fn ensure_customer(&self, customer_id: i32) -> Result<(), AppError> {
        match CustomerRepository::new(self.db).get_by_id(customer_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Customer with ID {} not found",
                customer_id
            ))),
        }
    }
}

/// Rejects the admission if a PENDING appointment already holds its window.
async fn ensure_free<C: ConnectionTrait>(
    repo: &AppointmentRepository<'_, C>,
    admission: &Admission,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let requested = admission.window;
    let taken = repo
        .find_pending_overlapping(admission.salon.id, requested, exclude_id)
        .await?;

    match taken
        .iter()
        .map(Appointment::window)
        .find(|booking| requested.collides_with_booking(booking))
    {
        Some(booking) => Err(BookingError::SlotTaken {
            booked_from: format_clock_label(booking.start, admission.tz),
            booked_until: format_clock_label(booking.end, admission.tz),
            requested_from: format_clock_label(requested.start, admission.tz),
            requested_until: format_clock_label(requested.end, admission.tz),
        }
        .into()),
        None => Ok(()),
    }
}

/// Rejects the booking if any of its services stopped being active since admission.
///
/// Dropping the transaction on error rolls the write back.
pub(super) async fn ensure_services_active<C: ConnectionTrait>(
    db: &C,
    service_ids: &[i32],
) -> Result<(), AppError> {
    let active = ServiceRepository::new(db)
        .find_active_by_ids(service_ids)
        .await?;
    let invalid: Vec<i32> = service_ids
        .iter()
        .copied()
        .filter(|id| !active.iter().any(|service| service.id == *id))
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(BookingError::InvalidServices(invalid).into())
    }
}

fn appointment_not_found() -> AppError {
    AppError::NotFound("Appointment not found.".to_string())
}
