//! Availability engine.
//!
//! Tiles a salon's opening hours for one date into slots as long as its
//! shortest active service, then removes slots taken by pending appointments,
//! slots already in the past and slots inside an HOURS leave. A DAY leave
//! closes the salon and yields no slots at all.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::server::{
    data::{
        appointment::AppointmentRepository, leave::LeaveRepository, salon::SalonRepository,
        service::ServiceRepository,
    },
    error::{booking::BookingError, AppError},
    model::{
        appointment::Appointment,
        availability::{DaySlots, SalonHours, SlotQuery},
        leave::{Leave, LeaveKind},
    },
    util::{
        interval::Interval,
        parse::parse_date,
        time::{close_instant, rebase, today_in},
    },
};

/// Everything the engine needs to know about one salon day.
#[derive(Debug, Clone)]
pub struct DayPlan<'a> {
    pub date: NaiveDate,
    pub hours: SalonHours,
    pub tz: Tz,
    /// Slot length, the duration of the shortest active service.
    pub granularity: Duration,
    /// Leaves of the salon on `date`.
    pub leaves: &'a [Leave],
    /// Windows of PENDING appointments that may touch `date`.
    pub pending: &'a [Interval],
}

/// Computes the free slots of a salon day.
///
/// Pure and deterministic: identical inputs give identical output. A slot
/// ending exactly at closing time is kept.
///
/// The `now` filter runs for every date, not only for today. Slots starting at
/// or before `now` are dropped, so a past date yields no slots and a future
/// date is unaffected.
pub fn compute_available_slots(plan: &DayPlan<'_>, now: DateTime<Utc>) -> DaySlots {
    if plan.leaves.iter().any(|leave| leave.kind == LeaveKind::Day) {
        return DaySlots {
            date: plan.date,
            tz: plan.tz,
            closed: true,
            slots: Vec::new(),
        };
    }

    let open = Interval::new(
        rebase(plan.date, plan.hours.open, plan.tz),
        close_instant(plan.date, plan.hours.close, plan.tz),
    );
    let blocked: Vec<Interval> = plan
        .leaves
        .iter()
        .filter_map(|leave| leave.window(plan.tz))
        .collect();

    let slots = open
        .tile(plan.granularity)
        .into_iter()
        .filter(|slot| {
            !plan
                .pending
                .iter()
                .any(|booking| slot.collides_with_booking(booking))
        })
        .filter(|slot| slot.start > now)
        .filter(|slot| !blocked.iter().any(|window| slot.overlaps(window)))
        .collect();

    DaySlots {
        date: plan.date,
        tz: plan.tz,
        closed: false,
        slots,
    }
}

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
    default_tz: Tz,
}

impl<'a> AvailabilityService<'a> {
    /// Creates a new AvailabilityService instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `default_tz` - Zone for salons without their own timezone
    pub fn new(db: &'a DatabaseConnection, default_tz: Tz) -> Self {
        Self { db, default_tz }
    }

    /// Loads a salon day from the store and computes its free slots
    ///
    /// Uses the named salon, or the first salon when the query names none. The
    /// date defaults to today in the salon's zone when absent or unparsable.
    ///
    /// # Returns
    /// - `Ok(DaySlots)` - Free slots, possibly none
    /// - `Err(AppError::NotFound)` - Salon missing, or it has no active services
    /// - `Err(AppError::BookingErr(HoursNotConfigured))` - Opening or closing time unset
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_slots(
        &self,
        query: SlotQuery,
        now: DateTime<Utc>,
    ) -> Result<DaySlots, AppError> {
        let salon_repo = SalonRepository::new(self.db);
        let salon = match query.salon_id {
            Some(id) => salon_repo.get_by_id(id).await?,
            None => salon_repo.first().await?,
        }
        .ok_or_else(|| AppError::NotFound("Salon not found.".to_string()))?;

        let tz = salon.zone(self.default_tz);
        let date = query
            .date
            .as_deref()
            .and_then(|raw| parse_date(raw).ok())
            .unwrap_or_else(|| today_in(tz, now));
        let hours = salon.hours().ok_or(BookingError::HoursNotConfigured)?;

        let granularity = ServiceRepository::new(self.db)
            .active_for_salon(salon.id)
            .await?
            .iter()
            .map(|service| service.duration)
            .min()
            .ok_or_else(|| AppError::NotFound("Service not found.".to_string()))?;

        let leaves = LeaveRepository::new(self.db)
            .get_for_salon_on(salon.id, date)
            .await?;

        let day = Interval::new(
            rebase(date, hours.open, tz),
            close_instant(date, hours.close, tz),
        );
        let pending: Vec<Interval> = AppointmentRepository::new(self.db)
            .find_pending_overlapping(salon.id, day, None)
            .await?
            .iter()
            .map(Appointment::window)
            .collect();

        debug!(
            "Computing slots for salon {} on {} ({} pending, {} leaves, {} min granularity)",
            salon.id,
            date,
            pending.len(),
            leaves.len(),
            granularity
        );

        Ok(compute_available_slots(
            &DayPlan {
                date,
                hours,
                tz,
                granularity: Duration::minutes(i64::from(granularity)),
                leaves: &leaves,
                pending: &pending,
            },
            now,
        ))
    }
}
