use crate::server::{
    data::{
        appointment::AppointmentRepository, leave::LeaveRepository, salon::SalonRepository,
        service::ServiceRepository,
    },
    error::AppError,
    model::{
        appointment::{
            AppointmentChanges, AppointmentFilter, AppointmentStatus, NewAppointment,
        },
        leave::LeaveKind,
    },
    util::interval::Interval,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod appointment;

/// Calendar date every repository test books on.
fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
}

/// UTC instant on the test date.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 10, hour, minute, 0).unwrap()
}
